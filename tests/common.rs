#![allow(dead_code)]

use bytemuck::Pod;
use endian_converter::SwapEndian;

/// A value whose raw bytes read `1, 2, ..., size_of::<T>()`.
pub fn counting<T: Pod>() -> T {
    let mut value: T = bytemuck::Zeroable::zeroed();
    for (byte, n) in bytemuck::bytes_of_mut(&mut value).iter_mut().zip(1_u8..) {
        *byte = n;
    }
    value
}

/// The bytes `size_of::<T>(), ..., 2, 1`.
pub fn counting_reversed<T>() -> Vec<u8> {
    (1..=size_of::<T>() as u8).rev().collect()
}

/// Swap a counting value and check the raw bytes came back reversed.
pub fn assert_swap_reverses<T: Pod + SwapEndian>(label: &str) {
    let swapped = counting::<T>().swap_endian();
    assert_eq!(
        bytemuck::bytes_of(&swapped),
        counting_reversed::<T>().as_slice(),
        "{label}: swapped bytes should be the input reversed"
    );
}
