//! Binary format definitions for `.bin` matrix files
//!
//! This module contains pure data structure definitions for the wire format.
//! No I/O operations - only layout and byte decoding.

pub mod byte_order;
pub mod constants;
pub mod header;

pub use byte_order::ByteOrder;
pub use header::MatrixHeader;
