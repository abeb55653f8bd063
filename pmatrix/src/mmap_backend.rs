//! Memory-mapped loading for `.bin` matrix files
//!
//! Maps the whole file and decodes it in one pass with
//! [`DenseMatrix::from_bytes`]. Produces the same matrix and the same
//! errors as the streaming loader.

use crate::config::ReadConfig;
use crate::error::{Error, Result};
use crate::loader::LoadedMatrix;
use memmap2::Mmap;
use pmatrix_core::format::constants::VALUE_SIZE;
use pmatrix_core::{DenseMatrix, FormatError, MatrixHeader};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Load a matrix file through a read-only memory map
pub fn load_matrix_mapped<P: AsRef<Path>>(path: P, config: &ReadConfig) -> Result<LoadedMatrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file
        .metadata()
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    // Zero-length mappings are rejected on some platforms
    let matrix = if len == 0 {
        decode_image(&[], path, config)?
    } else {
        // SAFETY: Mmap::map is unsafe because the file may change under the
        // map. This assumes:
        // 1. No other process truncates the file while it is mapped, which
        //    would fault on access past the new end
        // 2. Concurrent writes only risk reading a mix of old and new values,
        //    never out-of-bounds memory
        // 3. The map lives only for this block; values are copied out
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        decode_image(&mmap, path, config)?
    };

    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        columns = matrix.columns(),
        max_width = matrix.max_width(),
        "Loaded mapped matrix"
    );

    Ok(LoadedMatrix {
        path: path.to_path_buf(),
        matrix,
    })
}

fn decode_image(bytes: &[u8], path: &Path, config: &ReadConfig) -> Result<DenseMatrix> {
    DenseMatrix::from_bytes(bytes, config.byte_order).map_err(|reason| match reason {
        FormatError::InsufficientBuffer => Error::Truncated {
            path: path.to_path_buf(),
            expected: 2,
            read: bytes.len() / VALUE_SIZE,
        },
        FormatError::TruncatedPayload => {
            let declared = MatrixHeader::from_bytes(bytes, config.byte_order)
                .map(|h| h.value_count())
                .unwrap_or(0);
            Error::Truncated {
                path: path.to_path_buf(),
                expected: declared.saturating_add(2),
                read: bytes.len() / VALUE_SIZE,
            }
        }
        reason => Error::Format {
            path: path.to_path_buf(),
            reason,
        },
    })
}
