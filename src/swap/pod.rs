//! Byte-buffer swap for floats, arrays and plain-old-data composites.
//!
//! The value's raw bytes are copied into a scratch buffer, reversed and
//! copied into freshly zeroed storage of the same type. This relies on
//! reinterpreting the object representation and so cannot run in a `const`
//! context. Eligibility is decided by [`bytemuck::Pod`]: a type that cannot
//! be rebuilt from an arbitrary byte pattern fails to compile.
//!
//! ```compile_fail
//! use endian_converter::swap::pod::swap_pod;
//!
//! // Not every byte pattern is a valid `char`.
//! let _ = swap_pod('a');
//! ```
//!
//! ```compile_fail
//! // Padding bytes have no defined value, so `Pod` cannot be derived.
//! #[derive(Clone, Copy, bytemuck::Zeroable, bytemuck::Pod)]
//! #[repr(C)]
//! struct Padded {
//!     tag: u8,
//!     value: u32,
//! }
//! ```
use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

use super::SwapEndian;

/// Values up to this size are reversed without touching the heap.
pub(crate) const INLINE_SWAP_BYTES: usize = 16;

/// Reverse the object representation of `value` end to end.
pub fn swap_pod<T: Pod>(value: T) -> T {
    if size_of::<T>() == 1 {
        return value;
    }

    let mut buffer: SmallVec<[u8; INLINE_SWAP_BYTES]> =
        SmallVec::from_slice(bytemuck::bytes_of(&value));
    buffer.reverse();

    let mut swapped: T = Zeroable::zeroed();
    bytemuck::bytes_of_mut(&mut swapped).copy_from_slice(&buffer);
    swapped
}

/// Route one or more [`bytemuck::Pod`] types through [`swap_pod`].
///
/// ```
/// use endian_converter::{impl_swap_pod, swap_endian_v};
///
/// #[derive(Clone, Copy, Debug, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
/// #[repr(C)]
/// struct Pair {
///     lo: u16,
///     hi: u16,
/// }
///
/// impl_swap_pod!(Pair);
///
/// let swapped = swap_endian_v(Pair { lo: 0x0102, hi: 0x0304 });
/// assert_eq!(swapped, Pair { lo: 0x0403, hi: 0x0201 });
/// ```
#[macro_export]
macro_rules! impl_swap_pod {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::SwapEndian for $t {
            #[inline]
            fn swap_endian(self) -> Self {
                $crate::swap::pod::swap_pod(self)
            }
        }
    )+};
}

crate::impl_swap_pod!(f32, f64);

impl<T: Pod, const N: usize> SwapEndian for [T; N] {
    #[inline]
    fn swap_endian(self) -> Self {
        swap_pod(self)
    }
}
