//! Error types for matrix decoding

/// Errors that can occur while decoding a matrix file image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer bytes than the fixed header size
    InsufficientBuffer,
    /// Payload holds fewer values than the header declares
    TruncatedPayload,
    /// More values than the dimensions account for
    PayloadLength,
    /// Rows of differing length passed to a constructor
    RaggedRows,
    /// Unrecognized byte order name
    InvalidByteOrder,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatError::InsufficientBuffer => "File is shorter than the matrix header",
            FormatError::TruncatedPayload => "File is shorter than its header declares",
            FormatError::PayloadLength => "Value count does not match dimensions",
            FormatError::RaggedRows => "Rows have differing lengths",
            FormatError::InvalidByteOrder => "Unknown byte order (expected native, little or big)",
        };
        write!(f, "{msg}")
    }
}

/// Result type for format operations
pub type Result<T> = core::result::Result<T, FormatError>;
