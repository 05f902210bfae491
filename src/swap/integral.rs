//! Arithmetic byte swap for primitive integers.
//!
//! Each byte is isolated and relocated with a shift-left/shift-right pair and
//! OR-ed into an accumulator, walking the byte index from the most
//! significant position down to zero. No byte array is involved, so every
//! function here is a `const fn`:
//!
//! ```
//! use endian_converter::swap::integral::swap_u16;
//!
//! const SWAPPED: u16 = swap_u16(0xAAF0);
//! assert_eq!(SWAPPED, 0xF0AA);
//! ```
//!
//! The `to_native_*`/`from_native_*` forms take the byte order as a type and
//! are `const` as well.
use crate::endian::ByteOrder;

use super::SwapEndian;

macro_rules! directional {
    ($t:ty, $swap:ident, $to:ident, $from:ident) => {
        #[doc = concat!("Convert a `", stringify!($t), "` stored in `E` byte order to native order.")]
        #[inline(always)]
        pub const fn $to<E: ByteOrder>(value: $t) -> $t {
            if E::IS_NATIVE { value } else { $swap(value) }
        }

        #[doc = concat!("Convert a native `", stringify!($t), "` to `E` byte order.")]
        #[inline(always)]
        pub const fn $from<E: ByteOrder>(value: $t) -> $t {
            if E::IS_NATIVE { value } else { $swap(value) }
        }

        impl SwapEndian for $t {
            #[inline(always)]
            fn swap_endian(self) -> Self {
                $swap(self)
            }
        }
    };
}

macro_rules! unsigned {
    ($($t:ty => $swap:ident, $to:ident, $from:ident;)*) => {$(
        #[doc = concat!("Reverse the bytes of a `", stringify!($t), "`.")]
        #[inline]
        pub const fn $swap(value: $t) -> $t {
            const LAST: u32 = <$t>::BITS / 8 - 1;

            // Moves byte LAST-index to position index, then recurses downward.
            const fn place(index: u32, original: $t, acc: $t) -> $t {
                if index == 0 {
                    acc | original >> (LAST * 8)
                } else {
                    place(
                        index - 1,
                        original,
                        acc | original << (index * 8) >> (LAST * 8) << (index * 8),
                    )
                }
            }

            place(LAST, value, 0)
        }

        directional!($t, $swap, $to, $from);
    )*};
}

// Signed values go through the unsigned twin so `>>` never sign-extends.
macro_rules! signed {
    ($($t:ty as $u:ty => $swap:ident via $inner:ident, $to:ident, $from:ident;)*) => {$(
        #[doc = concat!("Reverse the bytes of an `", stringify!($t), "`.")]
        #[inline]
        pub const fn $swap(value: $t) -> $t {
            $inner(value as $u) as $t
        }

        directional!($t, $swap, $to, $from);
    )*};
}

unsigned! {
    u8 => swap_u8, to_native_u8, from_native_u8;
    u16 => swap_u16, to_native_u16, from_native_u16;
    u32 => swap_u32, to_native_u32, from_native_u32;
    u64 => swap_u64, to_native_u64, from_native_u64;
    u128 => swap_u128, to_native_u128, from_native_u128;
    usize => swap_usize, to_native_usize, from_native_usize;
}

signed! {
    i8 as u8 => swap_i8 via swap_u8, to_native_i8, from_native_i8;
    i16 as u16 => swap_i16 via swap_u16, to_native_i16, from_native_i16;
    i32 as u32 => swap_i32 via swap_u32, to_native_i32, from_native_i32;
    i64 as u64 => swap_i64 via swap_u64, to_native_i64, from_native_i64;
    i128 as u128 => swap_i128 via swap_u128, to_native_i128, from_native_i128;
    isize as usize => swap_isize via swap_usize, to_native_isize, from_native_isize;
}
