//! Byte-swap engine. Every swappable type picks exactly one strategy through
//! its `SwapEndian` impl: integers use the arithmetic path in [`integral`],
//! everything else goes through the byte buffer in [`pod`].
pub mod integral;
pub mod pod;
pub mod underlying;

pub use underlying::Underlying;

/// Reverses the byte order of a fixed-size value.
///
/// Implemented for all primitive integers, `f32`, `f64`, arrays of
/// [`bytemuck::Pod`] elements and any type registered with
/// [`impl_swap_pod!`](crate::impl_swap_pod). Extended-precision floats have
/// no fixed layout and are not supported.
pub trait SwapEndian: Copy {
    fn swap_endian(self) -> Self;

    #[inline]
    fn swap_endian_in_place(&mut self) {
        *self = self.swap_endian();
    }
}

/// Swap the byte order of `value`.
///
/// For integers the same computation is available as a `const fn` in
/// [`integral`], e.g. [`integral::swap_u32`].
///
/// ```
/// use endian_converter::swap_endian_v;
///
/// assert_eq!(swap_endian_v(0x7565_256A_u32), 0x6A25_6575);
/// assert_eq!(swap_endian_v(0xFA_u8), 0xFA);
/// ```
///
/// Types that cannot be rebuilt from an arbitrary byte pattern are rejected
/// while compiling:
///
/// ```compile_fail
/// use endian_converter::swap_endian_v;
///
/// let _ = swap_endian_v(true);
/// ```
#[inline]
pub fn swap_endian_v<T: SwapEndian>(value: T) -> T {
    value.swap_endian()
}

/// Swap through the underlying representation and rebuild `T`.
#[inline]
pub(crate) fn swap_unwrapped<T: Underlying>(value: T) -> T {
    T::from_repr(value.into_repr().swap_endian())
}
