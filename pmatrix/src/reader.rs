//! Sequential decoder for 4-byte signed integers

use pmatrix_core::format::constants::VALUE_SIZE;
use pmatrix_core::ByteOrder;
use std::io::{self, Read};

/// Reads one 32-bit signed value per call from an underlying reader
///
/// Each call issues exactly one `read_exact` of 4 bytes; nothing is read
/// ahead. A stream that ends mid-value yields `ErrorKind::UnexpectedEof`.
#[derive(Debug)]
pub struct BinaryReader<R> {
    inner: R,
    order: ByteOrder,
    values_read: usize,
}

impl<R: Read> BinaryReader<R> {
    /// Wrap a reader, decoding values in the given byte order
    pub fn new(inner: R, order: ByteOrder) -> Self {
        Self {
            inner,
            order,
            values_read: 0,
        }
    }

    /// Read the next value and advance by 4 bytes
    pub fn read_i32(&mut self) -> io::Result<i32> {
        let mut buf = [0u8; VALUE_SIZE];
        self.inner.read_exact(&mut buf)?;
        self.values_read += 1;
        Ok(self.order.decode_i32(buf))
    }

    /// Number of values fully read so far
    pub fn values_read(&self) -> usize {
        self.values_read
    }

    /// Byte order in use
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Recover the underlying reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}
