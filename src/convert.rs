//! Directional converters. The byte order is a type parameter, so the
//! native comparison is a constant and the untaken branch disappears.
//!
//! Swapping is its own inverse; "to" and "from" differ only in which side of
//! the conversion the tag describes.
use crate::endian::ByteOrder;
use crate::swap::{Underlying, swap_unwrapped};

/// Convert `value`, laid out in `From` byte order, to native order.
///
/// Symbolic types are swapped through their [`Underlying`] integer and
/// rebuilt afterwards. Integers have `const` equivalents in
/// [`swap::integral`](crate::swap::integral).
#[inline]
pub fn to_native_endian<From: ByteOrder, T: Underlying>(value: T) -> T {
    if From::IS_NATIVE {
        value
    } else {
        swap_unwrapped(value)
    }
}

/// Convert native `value` to `To` byte order.
#[inline]
pub fn from_native_endian<To: ByteOrder, T: Underlying>(value: T) -> T {
    if To::IS_NATIVE {
        value
    } else {
        swap_unwrapped(value)
    }
}
