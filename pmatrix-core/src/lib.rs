#![no_std]

//! PMatrix Core - Binary Dense Matrix Format Definitions
//!
//! This crate provides the wire format and pure decoding logic for the
//! course's `.bin` dense matrix files: an 8-byte header holding the row and
//! column counts, followed by row-major 32-bit signed integers.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod width;

pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use matrix::DenseMatrix;
pub use width::display_width;
