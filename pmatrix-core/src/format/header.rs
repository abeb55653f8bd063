//! Matrix file header definition
//!
//! The header is two signed 32-bit integers: row count, then column count.
//! There is no magic, version or checksum; the values are trusted as-is.

use super::constants::{HEADER_SIZE, VALUE_SIZE};
use super::ByteOrder;
use crate::FormatError;

/// Header at the start of every `.bin` matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Declared number of rows
    pub rows: i32,
    /// Declared number of columns
    pub columns: i32,
}

impl MatrixHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a header from declared dimensions
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Row count as decoded; a negative declaration yields no rows
    pub const fn row_count(&self) -> usize {
        if self.rows < 0 {
            0
        } else {
            self.rows as usize
        }
    }

    /// Column count as decoded; a negative declaration yields empty rows
    pub const fn column_count(&self) -> usize {
        if self.columns < 0 {
            0
        } else {
            self.columns as usize
        }
    }

    /// Number of payload values the header declares
    pub const fn value_count(&self) -> usize {
        self.row_count().saturating_mul(self.column_count())
    }

    /// Size of the declared payload in bytes
    pub const fn payload_size(&self) -> usize {
        self.value_count().saturating_mul(VALUE_SIZE)
    }

    /// Parse header from the first eight bytes of a file image
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, FormatError> {
        if bytes.len() < Self::SIZE {
            return Err(FormatError::InsufficientBuffer);
        }

        let rows = order.decode_i32([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let columns = order.decode_i32([bytes[4], bytes[5], bytes[6], bytes[7]]);

        Ok(Self { rows, columns })
    }

    /// Convert header to bytes array
    pub const fn to_bytes_array(&self, order: ByteOrder) -> [u8; Self::SIZE] {
        let r = order.encode_i32(self.rows);
        let c = order.encode_i32(self.columns);
        [r[0], r[1], r[2], r[3], c[0], c[1], c[2], c[3]]
    }
}
