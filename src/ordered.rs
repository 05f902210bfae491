//! Values kept in a fixed byte order.
//!
//! `Ordered<E, T>` holds the representation of a `T` laid out in byte order
//! `E`. It is `Pod` whenever `T` is, so it can sit directly in a
//! `#[repr(C)]` record that mirrors an on-disk or on-wire layout.
//!
//! ```
//! use endian_converter::{Be, Le};
//!
//! #[derive(Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
//! #[repr(C)]
//! struct Header {
//!     magic: Be<u32>,
//!     length: Le<u16>,
//!     flags: Le<u16>,
//! }
//!
//! let bytes = [0xCA, 0xFE, 0xBA, 0xBE, 0x10, 0x00, 0x01, 0x80];
//! let header: Header = bytemuck::pod_read_unaligned(&bytes);
//! assert_eq!(header.magic.get(), 0xCAFE_BABE);
//! assert_eq!(header.length.get(), 0x10);
//! assert_eq!(header.flags.get(), 0x8001);
//! ```
use std::{fmt, marker::PhantomData};

use bytemuck::{Pod, Zeroable};

use crate::convert::{from_native_endian, to_native_endian};
use crate::endian::{BigEndian, ByteOrder, Endian, LittleEndian};
use crate::swap::Underlying;

#[repr(transparent)]
pub struct Ordered<E: ByteOrder, T> {
    raw: T,
    order: PhantomData<E>,
}

pub type Le<T> = Ordered<LittleEndian, T>;
pub type Be<T> = Ordered<BigEndian, T>;

impl<E: ByteOrder, T> Ordered<E, T> {
    /// Wrap an already ordered representation without converting it.
    #[inline(always)]
    pub const fn from_raw(raw: T) -> Self {
        Self {
            raw,
            order: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn endian(&self) -> Endian {
        E::ENDIAN
    }
}

impl<E: ByteOrder, T: Copy> Ordered<E, T> {
    /// The stored representation, still in `E` order.
    #[inline(always)]
    pub const fn to_raw(&self) -> T {
        self.raw
    }
}

impl<E: ByteOrder, T: Underlying> Ordered<E, T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_raw(from_native_endian::<E, T>(value))
    }

    #[inline]
    pub fn get(self) -> T {
        to_native_endian::<E, T>(self.raw)
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        self.raw = from_native_endian::<E, T>(value);
    }
}

impl<E: ByteOrder, T: Copy> Clone for Ordered<E, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ByteOrder, T: Copy> Copy for Ordered<E, T> {}

impl<E: ByteOrder, T: PartialEq> PartialEq for Ordered<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: ByteOrder, T: Eq> Eq for Ordered<E, T> {}

impl<E: ByteOrder, T: Underlying + Default> Default for Ordered<E, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<E: ByteOrder, T: Underlying> From<T> for Ordered<E, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<E: ByteOrder, T: Underlying + fmt::Debug> fmt::Debug for Ordered<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match E::ENDIAN {
            Endian::Little => "Le",
            Endian::Big => "Be",
        })
        .field(&self.get())
        .finish()
    }
}

// SAFETY: `repr(transparent)` over `T`; `PhantomData` is zero-sized.
unsafe impl<E: ByteOrder, T: Zeroable> Zeroable for Ordered<E, T> {}
// SAFETY: as above; `Pod` holds for `T`, and `E` only carries a tag.
unsafe impl<E: ByteOrder, T: Pod> Pod for Ordered<E, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::NativeEndian;

    #[test]
    fn stores_bytes_in_requested_order() {
        let be = Be::new(0x0102_0304_u32);
        assert_eq!(be.to_raw().to_ne_bytes(), [1, 2, 3, 4], "big endian storage layout");
        let le = Le::new(0x0102_0304_u32);
        assert_eq!(le.to_raw().to_ne_bytes(), [4, 3, 2, 1], "little endian storage layout");
        assert_eq!(be.get(), le.get(), "both wrappers should read back the same value");
    }

    #[test]
    fn set_replaces_stored_value() {
        let mut field: Be<i16> = Be::default();
        assert_eq!(field.get(), 0);
        field.set(-2);
        assert_eq!(field.get(), -2);
        assert_eq!(field.to_raw().to_ne_bytes(), (-2_i16).to_be_bytes());
    }

    #[test]
    fn native_wrapper_is_transparent() {
        let field = Ordered::<NativeEndian, u64>::new(0xDEAD_BEEF);
        assert_eq!(field.to_raw(), 0xDEAD_BEEF, "native storage must not swap");
        assert_eq!(field.endian(), Endian::NATIVE);
    }

    #[test]
    fn debug_shows_native_value() {
        assert_eq!(format!("{:?}", Be::new(0x10_u16)), "Be(16)");
        assert_eq!(format!("{:?}", Le::from(2.5_f32)), "Le(2.5)");
    }

    #[test]
    fn casts_from_raw_bytes() {
        let words: [Be<u16>; 2] = bytemuck::cast([0x12_u8, 0x34, 0xAB, 0xCD]);
        assert_eq!(words[0].get(), 0x1234);
        assert_eq!(words[1].get(), 0xABCD);
    }
}
