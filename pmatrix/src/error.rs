//! Error types for loading and printing matrix files

use pmatrix_core::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pmatrix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, loading or printing matrices
#[derive(Error, Debug)]
pub enum Error {
    /// The path is neither a directory nor a `.bin` file
    #[error("Please specify a directory or .bin file as the first argument (got {})", .path.display())]
    InvalidPath {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The path does not exist or cannot be accessed
    #[error("Cannot access {}: {source}", .path.display())]
    NotFound {
        /// Path that could not be accessed
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },

    /// The file ended before all declared values were read
    #[error("{}: file ended after {read} of {expected} declared values", .path.display())]
    Truncated {
        /// File that was cut short
        path: PathBuf,
        /// Values declared, header included
        expected: usize,
        /// Values fully read, header included
        read: usize,
    },

    /// Any other I/O failure while reading a file or writing output
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read, or `-` for standard output
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// In-memory decoding failed
    #[error("{}: {reason}", .path.display())]
    Format {
        /// File being decoded
        path: PathBuf,
        /// Decoder error
        reason: FormatError,
    },

    /// Some files in a directory batch failed under the skip policy
    #[error("{failed} of {total} matrix files could not be printed")]
    BatchFailed {
        /// Files that failed
        failed: usize,
        /// Files attempted
        total: usize,
    },

    /// A configuration value could not be parsed
    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig {
        /// Environment variable name
        key: &'static str,
        /// Value that failed to parse
        value: String,
    },
}

impl Error {
    /// Wrap an error raised while writing rendered output
    pub(crate) fn output(source: io::Error) -> Self {
        Error::Io {
            path: PathBuf::from("-"),
            source,
        }
    }
}
