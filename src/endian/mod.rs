//! Byte-order tags. `Endian` is the runtime value; `LittleEndian`,
//! `BigEndian` and `NativeEndian` carry the same fact at the type level so
//! converters can resolve it while compiling.
pub mod error;

use std::{fmt, str::FromStr};

use crate::swap::{Underlying, swap_unwrapped};

pub use error::{EndianError, EndianResult};

/// Byte order of a stored value, chosen at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the compilation target, taken from `cfg(target_endian)`.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    #[inline(always)]
    pub const fn native() -> Self {
        Self::NATIVE
    }

    #[inline(always)]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Endian::Little, Endian::Little) | (Endian::Big, Endian::Big)
        )
    }

    #[inline(always)]
    pub const fn is_little(self) -> bool {
        matches!(self, Endian::Little)
    }

    #[inline(always)]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }

    /// Convert `value`, stored in `self` byte order, to native order.
    #[inline]
    pub fn to_native<T: Underlying>(self, value: T) -> T {
        if self.is_native() {
            value
        } else {
            swap_unwrapped(value)
        }
    }

    /// Convert native `value` to `self` byte order.
    #[inline]
    pub fn from_native<T: Underlying>(self, value: T) -> T {
        if self.is_native() {
            value
        } else {
            swap_unwrapped(value)
        }
    }

    /// Reorder a raw field laid out in `self` byte order into native order.
    #[inline]
    pub fn to_native_mut(self, bytes: &mut [u8]) {
        if bytes.len() > 1 && !self.is_native() {
            bytes.reverse();
        }
    }

    /// Reorder a raw native field into `self` byte order.
    #[inline]
    pub fn from_native_mut(self, bytes: &mut [u8]) {
        if bytes.len() > 1 && !self.is_native() {
            bytes.reverse();
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Little => f.write_str("little"),
            Endian::Big => f.write_str("big"),
        }
    }
}

impl FromStr for Endian {
    type Err = EndianError;

    fn from_str(s: &str) -> EndianResult<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(EndianError::Empty);
        }
        match name.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Endian::Little),
            "big" | "be" => Ok(Endian::Big),
            "native" => Ok(Endian::NATIVE),
            _ => Err(EndianError::UnknownName(name.to_owned())),
        }
    }
}

/// Byte order fixed at the type level.
pub trait ByteOrder: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const ENDIAN: Endian;
    const IS_NATIVE: bool = Self::ENDIAN.is_native();
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl ByteOrder for LittleEndian {
    const ENDIAN: Endian = Endian::Little;
}

impl ByteOrder for BigEndian {
    const ENDIAN: Endian = Endian::Big;
}

#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign() -> Endian {
        if cfg!(target_endian = "little") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    #[test]
    fn native_matches_target_configuration() {
        assert_eq!(
            Endian::NATIVE.is_big(),
            cfg!(target_endian = "big"),
            "native tag must follow target_endian"
        );
        assert_eq!(
            NativeEndian::ENDIAN,
            Endian::NATIVE,
            "type-level native must agree with the runtime constant"
        );
        assert!(NativeEndian::IS_NATIVE);
        assert!(!foreign().is_native());
    }

    #[test]
    fn slice_round_trip() {
        let mut data: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        for endian in [Endian::Little, Endian::Big] {
            endian.to_native_mut(&mut data);
            endian.from_native_mut(&mut data);
            assert_eq!(
                data,
                [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
                "{endian} round trip failed"
            );
        }

        let mut data: [u8; 3] = [0x01, 0x02, 0x03];
        for endian in [Endian::Little, Endian::Big] {
            endian.to_native_mut(&mut data);
            endian.from_native_mut(&mut data);
            assert_eq!(data, [0x01, 0x02, 0x03], "{endian} round trip failed");
        }
    }

    #[test]
    fn slice_conversion_different() {
        let mut data: [u8; 4] = [0x0A, 0x0B, 0x0C, 0x0D];
        foreign().to_native_mut(&mut data);
        assert_eq!(data, [0x0D, 0x0C, 0x0B, 0x0A], "foreign order should reverse");

        foreign().from_native_mut(&mut data);
        assert_eq!(data, [0x0A, 0x0B, 0x0C, 0x0D], "reverse conversion failed");
    }

    #[test]
    fn slice_conversion_same() {
        let mut data: [u8; 4] = [0x0A, 0x0B, 0x0C, 0x0D];
        Endian::NATIVE.to_native_mut(&mut data);
        assert_eq!(data, [0x0A, 0x0B, 0x0C, 0x0D], "native order must not move bytes");

        Endian::NATIVE.from_native_mut(&mut data);
        assert_eq!(data, [0x0A, 0x0B, 0x0C, 0x0D], "native order must not move bytes");
    }

    #[test]
    fn runtime_value_conversion() {
        assert_eq!(Endian::NATIVE.to_native(0x1122_u16), 0x1122);
        assert_eq!(foreign().to_native(0x1122_u16), 0x2211);
        assert_eq!(foreign().from_native(0x1122_3344_u32), 0x4433_2211);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("little".parse::<Endian>(), Ok(Endian::Little));
        assert_eq!(" LE ".parse::<Endian>(), Ok(Endian::Little));
        assert_eq!("Big".parse::<Endian>(), Ok(Endian::Big));
        assert_eq!("be".parse::<Endian>(), Ok(Endian::Big));
        assert_eq!("native".parse::<Endian>(), Ok(Endian::NATIVE));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("".parse::<Endian>(), Err(EndianError::Empty));
        assert_eq!(
            "pdp".parse::<Endian>(),
            Err(EndianError::UnknownName("pdp".into())),
            "unrecognised names should be reported verbatim"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for endian in [Endian::Little, Endian::Big] {
            assert_eq!(endian.to_string().parse::<Endian>(), Ok(endian));
        }
    }
}
