//! Format constants for `.bin` matrix files

/// Extension (without the dot) that marks a matrix file
pub const FILE_EXTENSION: &str = "bin";

/// Size of one encoded value in bytes
pub const VALUE_SIZE: usize = 4;

/// Size of the header (row count + column count) in bytes
pub const HEADER_SIZE: usize = 2 * VALUE_SIZE;
