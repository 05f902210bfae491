//! Byte-order conversion for integers and plain-old-data values.
//!
//! Integers swap through shift/mask arithmetic that also works in `const`
//! contexts (see [`swap::integral`]). Floats, arrays and any
//! [`bytemuck::Pod`] composite swap through a reversed byte buffer
//! (see [`swap::pod`]). [`to_native_endian`] and [`from_native_endian`] skip
//! the swap when the requested byte order is already the target's.
//!
//! ```
//! use endian_converter::{BigEndian, from_native_endian, to_native_endian};
//!
//! let wire = from_native_endian::<BigEndian, u32>(0x1234_5678);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! assert_eq!(to_native_endian::<BigEndian, u32>(wire), 0x1234_5678);
//! ```

pub mod convert;
pub mod endian;
pub mod ordered;
pub mod swap;

pub use bytemuck;

pub use convert::{from_native_endian, to_native_endian};
pub use endian::{BigEndian, ByteOrder, Endian, EndianError, EndianResult, LittleEndian, NativeEndian};
pub use ordered::{Be, Le, Ordered};
pub use swap::{SwapEndian, Underlying, swap_endian_v};
