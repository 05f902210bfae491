//! Mapping from symbolic types to the integers they are stored as.
use super::SwapEndian;

/// A value that is converted through an integral representation of the same
/// size. Both directions must be total: every `Repr` value, including a
/// byte-swapped one, has to produce some `Self`.
///
/// Every [`SwapEndian`] type maps to itself. Open enumerations declared with
/// [`endian_enum!`](crate::endian_enum) map to their integer.
pub trait Underlying: Copy {
    type Repr: SwapEndian;

    fn into_repr(self) -> Self::Repr;
    fn from_repr(repr: Self::Repr) -> Self;
}

impl<T: SwapEndian> Underlying for T {
    type Repr = T;

    #[inline(always)]
    fn into_repr(self) -> T {
        self
    }

    #[inline(always)]
    fn from_repr(repr: T) -> T {
        repr
    }
}

/// Declare an open enumeration: a transparent integer newtype with one
/// associated constant per named value.
///
/// Unlike a Rust `enum`, any bit pattern of the representation is a valid
/// value, so swapped or unrecognised inputs survive a conversion.
///
/// ```
/// use endian_converter::{BigEndian, endian_enum, from_native_endian, to_native_endian};
///
/// endian_enum! {
///     pub enum Opcode: u16 {
///         Nop = 0x0001,
///         Halt = 0x0100,
///     }
/// }
///
/// let wire = from_native_endian::<BigEndian, _>(Opcode::Halt);
/// assert_eq!(to_native_endian::<BigEndian, _>(wire), Opcode::Halt);
/// assert_eq!(Opcode::Nop.name(), Some("Nop"));
/// assert_eq!(format!("{:?}", Opcode(7)), "Opcode(0x7)");
/// ```
#[macro_export]
macro_rules! endian_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $name(pub $repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: $name = $name($value);
            )*

            /// Name of the matching constant, if any.
            pub const fn name(self) -> ::core::option::Option<&'static str> {
                $(
                    if self.0 == $value {
                        return ::core::option::Option::Some(stringify!($variant));
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    ::core::option::Option::Some(name) => f.write_str(name),
                    ::core::option::Option::None => {
                        write!(f, "{}({:#x})", stringify!($name), self.0)
                    }
                }
            }
        }

        impl ::core::convert::From<$repr> for $name {
            #[inline]
            fn from(value: $repr) -> Self {
                $name(value)
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::Underlying for $name {
            type Repr = $repr;

            #[inline(always)]
            fn into_repr(self) -> $repr {
                self.0
            }

            #[inline(always)]
            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }
        }

        // SAFETY: `repr(transparent)` over a primitive integer.
        unsafe impl $crate::bytemuck::Zeroable for $name {}
        // SAFETY: as above; every bit pattern of the integer is a valid value.
        unsafe impl $crate::bytemuck::Pod for $name {}
    };
}
