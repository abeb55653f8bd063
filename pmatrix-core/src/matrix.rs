//! Dense row-major matrix decoded from a `.bin` file

use crate::format::constants::VALUE_SIZE;
use crate::format::{ByteOrder, MatrixHeader};
use crate::width::display_width;
use crate::FormatError;
use alloc::vec::Vec;

/// Fully decoded matrix plus the widest cell's display width
///
/// Every row holds exactly `columns` values. The matrix is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenseMatrix {
    rows: usize,
    columns: usize,
    values: Vec<i32>,
    max_width: usize,
}

impl DenseMatrix {
    /// Build from a flat row-major buffer
    ///
    /// `values` must hold exactly `rows * columns` elements.
    pub fn from_values(rows: usize, columns: usize, values: Vec<i32>) -> Result<Self, FormatError> {
        let expected = rows
            .checked_mul(columns)
            .ok_or(FormatError::TruncatedPayload)?;
        if values.len() < expected {
            return Err(FormatError::TruncatedPayload);
        }
        if values.len() > expected {
            return Err(FormatError::PayloadLength);
        }

        let max_width = values.iter().map(|&v| display_width(v)).max().unwrap_or(0);

        Ok(Self {
            rows,
            columns,
            values,
            max_width,
        })
    }

    /// Build from nested rows, which must all share one length
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, FormatError> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(FormatError::RaggedRows);
            }
            values.extend_from_slice(row);
        }
        Self::from_values(rows.len(), columns, values)
    }

    /// Decode a complete in-memory file image
    ///
    /// Bytes past the declared payload are ignored.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, FormatError> {
        let header = MatrixHeader::from_bytes(bytes, order)?;
        let payload = &bytes[MatrixHeader::SIZE..];
        let payload_size = header.payload_size();
        if payload.len() < payload_size {
            return Err(FormatError::TruncatedPayload);
        }
        let payload = &payload[..payload_size];

        let values = if order.is_host() {
            match bytemuck::try_cast_slice::<u8, i32>(payload) {
                Ok(cast) => cast.to_vec(),
                Err(_) => decode_values(payload, order),
            }
        } else {
            decode_values(payload, order)
        };

        Self::from_values(header.row_count(), header.column_count(), values)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get matrix dimensions as (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Largest `display_width` over all cells (0 for an empty matrix)
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Flat row-major values
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Get a single row
    pub fn row(&self, index: usize) -> Option<&[i32]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    /// Iterate rows in order
    pub fn rows_iter(&self) -> impl Iterator<Item = &[i32]> + '_ {
        (0..self.rows).map(move |i| {
            let start = i * self.columns;
            &self.values[start..start + self.columns]
        })
    }

    /// Get an element at the specified position
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if col >= self.columns {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows_iter().map(|r| r.to_vec()).collect()
    }
}

fn decode_values(payload: &[u8], order: ByteOrder) -> Vec<i32> {
    payload
        .chunks_exact(VALUE_SIZE)
        .map(|chunk| order.decode_i32([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn encode(rows: i32, columns: i32, values: &[i32], order: ByteOrder) -> Vec<u8> {
        let mut bytes = MatrixHeader::new(rows, columns).to_bytes_array(order).to_vec();
        for &v in values {
            bytes.extend_from_slice(&order.encode_i32(v));
        }
        bytes
    }

    #[test]
    fn test_from_bytes_2x2() {
        let bytes = encode(2, 2, &[1, 2, 3, 4], ByteOrder::Native);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Native).unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.to_rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(matrix.max_width(), 0);
    }

    #[test]
    fn test_from_bytes_foreign_order() {
        let bytes = encode(1, 3, &[-5, 1000, 0], ByteOrder::Big);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Big).unwrap();
        assert_eq!(matrix.values(), &[-5, 1000, 0]);
        assert_eq!(matrix.max_width(), 3);
    }

    #[test]
    fn test_from_bytes_unaligned_payload() {
        let mut bytes = vec![0u8];
        bytes.extend(encode(1, 2, &[42, -42], ByteOrder::Native));
        let matrix = DenseMatrix::from_bytes(&bytes[1..], ByteOrder::Native).unwrap();
        assert_eq!(matrix.values(), &[42, -42]);
    }

    #[test]
    fn test_truncated_payload() {
        let bytes = encode(2, 2, &[], ByteOrder::Native);
        assert_eq!(
            DenseMatrix::from_bytes(&bytes, ByteOrder::Native),
            Err(FormatError::TruncatedPayload)
        );

        let bytes = encode(2, 2, &[1, 2, 3], ByteOrder::Native);
        assert_eq!(
            DenseMatrix::from_bytes(&bytes, ByteOrder::Native),
            Err(FormatError::TruncatedPayload)
        );
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = encode(1, 1, &[9], ByteOrder::Little);
        bytes.extend_from_slice(&[1, 2, 3]);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(matrix.values(), &[9]);
    }

    #[test]
    fn test_empty_and_negative_headers() {
        let bytes = encode(0, 5, &[], ByteOrder::Native);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Native).unwrap();
        assert_eq!(matrix.dimensions(), (0, 5));
        assert_eq!(matrix.rows_iter().count(), 0);

        let bytes = encode(-1, 3, &[], ByteOrder::Native);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Native).unwrap();
        assert_eq!(matrix.dimensions(), (0, 3));

        let bytes = encode(2, -3, &[], ByteOrder::Native);
        let matrix = DenseMatrix::from_bytes(&bytes, ByteOrder::Native).unwrap();
        assert_eq!(matrix.dimensions(), (2, 0));
        assert_eq!(matrix.row(1), Some(&[][..]));
    }

    #[test]
    fn test_from_rows() {
        let matrix = DenseMatrix::from_rows(&[[1, -2], [30, 4]]).unwrap();
        assert_eq!(matrix.max_width(), 1);
        assert_eq!(matrix.get(1, 0), Some(30));
        assert_eq!(matrix.get(1, 2), None);
        assert_eq!(matrix.get(2, 0), None);

        let ragged: [&[i32]; 2] = [&[1, 2], &[3]];
        assert_eq!(DenseMatrix::from_rows(&ragged), Err(FormatError::RaggedRows));
    }

    #[test]
    fn test_from_values_length_mismatch() {
        assert_eq!(
            DenseMatrix::from_values(2, 2, vec![1, 2, 3, 4, 5]),
            Err(FormatError::PayloadLength)
        );
        assert_eq!(
            DenseMatrix::from_values(2, 2, vec![1, 2, 3]),
            Err(FormatError::TruncatedPayload)
        );
    }

    #[test]
    fn test_rows_iter_order() {
        let matrix = DenseMatrix::from_values(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = matrix.rows_iter().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }
}
