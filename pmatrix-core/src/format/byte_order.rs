//! Byte order selection for decoding 32-bit values
//!
//! Files are written in the producing machine's byte order and carry no
//! marker for it. The decoder takes the order as an explicit parameter so a
//! file produced on a machine of the other endianness can still be read.

use crate::FormatError;
use core::str::FromStr;

/// Byte order used to decode every 4-byte value of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    /// Order of the machine running the decoder
    #[default]
    Native,
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

impl ByteOrder {
    /// Map `Native` to the concrete order of the host
    pub const fn resolve(self) -> Self {
        match self {
            ByteOrder::Native => {
                if cfg!(target_endian = "big") {
                    ByteOrder::Big
                } else {
                    ByteOrder::Little
                }
            }
            other => other,
        }
    }

    /// Whether values in this order can be reinterpreted in place on this host
    pub const fn is_host(self) -> bool {
        matches!(
            (self.resolve(), cfg!(target_endian = "big")),
            (ByteOrder::Big, true) | (ByteOrder::Little, false)
        )
    }

    /// Decode one signed 32-bit value
    pub const fn decode_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Native => i32::from_ne_bytes(bytes),
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
        }
    }

    /// Encode one signed 32-bit value
    pub const fn encode_i32(self, value: i32) -> [u8; 4] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("native") {
            Ok(ByteOrder::Native)
        } else if s.eq_ignore_ascii_case("little") || s.eq_ignore_ascii_case("le") {
            Ok(ByteOrder::Little)
        } else if s.eq_ignore_ascii_case("big") || s.eq_ignore_ascii_case("be") {
            Ok(ByteOrder::Big)
        } else {
            Err(FormatError::InvalidByteOrder)
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::Native => write!(f, "native"),
            ByteOrder::Little => write!(f, "little"),
            ByteOrder::Big => write!(f, "big"),
        }
    }
}
