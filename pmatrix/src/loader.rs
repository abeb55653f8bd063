//! Matrix loading from `.bin` files
//!
//! Opens a file, reads the header and then every declared value through a
//! [`BinaryReader`]. The whole matrix is held in memory.

use crate::config::ReadConfig;
use crate::error::{Error, Result};
use crate::reader::BinaryReader;
use pmatrix_core::{DenseMatrix, MatrixHeader};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper bound on values reserved up front from an untrusted header
const MAX_PREALLOCATED_VALUES: usize = 1 << 20;

/// A decoded matrix together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMatrix {
    /// File the matrix was read from
    pub path: PathBuf,
    /// Decoded contents
    pub matrix: DenseMatrix,
}

impl LoadedMatrix {
    /// Base name of the source file
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Load a matrix file
pub fn load_matrix<P: AsRef<Path>>(path: P, config: &ReadConfig) -> Result<LoadedMatrix> {
    let path = path.as_ref();

    #[cfg(feature = "mmap")]
    if config.use_mmap {
        return crate::mmap_backend::load_matrix_mapped(path, config);
    }

    let file = File::open(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = load_from_reader(file, path, config)?;

    debug!(
        path = %path.display(),
        rows = matrix.rows(),
        columns = matrix.columns(),
        max_width = matrix.max_width(),
        "Loaded matrix"
    );

    Ok(LoadedMatrix {
        path: path.to_path_buf(),
        matrix,
    })
}

/// Decode a matrix from any reader; `path` is only used in errors
pub fn load_from_reader<R: Read>(source: R, path: &Path, config: &ReadConfig) -> Result<DenseMatrix> {
    let mut reader = BinaryReader::new(source, config.byte_order);
    let mut declared = None;

    decode(&mut reader, &mut declared).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated {
                path: path.to_path_buf(),
                expected: declared.map_or(2, |h: MatrixHeader| h.value_count().saturating_add(2)),
                read: reader.values_read(),
            }
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    })
}

fn decode<R: Read>(
    reader: &mut BinaryReader<R>,
    declared: &mut Option<MatrixHeader>,
) -> io::Result<DenseMatrix> {
    let rows = reader.read_i32()?;
    let columns = reader.read_i32()?;
    let header = MatrixHeader::new(rows, columns);
    *declared = Some(header);

    let count = header.value_count();
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATED_VALUES));
    for _ in 0..count {
        values.push(reader.read_i32()?);
    }

    DenseMatrix::from_values(header.row_count(), header.column_count(), values)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}
