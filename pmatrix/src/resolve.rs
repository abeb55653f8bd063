//! Resolution of the command-line path into matrix files
//!
//! A path is either a single `.bin` file or a directory whose `.bin` files
//! are processed in directory enumeration order. No recursion.

use crate::error::{Error, Result};
use pmatrix_core::format::constants::FILE_EXTENSION;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a command-line path refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single matrix file
    File(PathBuf),
    /// A directory of matrix files
    Directory(PathBuf),
}

/// Whether a path carries the matrix file extension
pub fn has_matrix_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == FILE_EXTENSION)
}

/// Classify a path; relative paths resolve against the current directory
pub fn classify<P: AsRef<Path>>(path: P) -> Result<Target> {
    let absolute = absolutize(path.as_ref(), std::env::current_dir)?;

    let metadata = fs::symlink_metadata(&absolute).map_err(|source| Error::NotFound {
        path: absolute.clone(),
        source,
    })?;

    if metadata.is_dir() {
        Ok(Target::Directory(absolute))
    } else if has_matrix_extension(&absolute) {
        Ok(Target::File(absolute))
    } else {
        Err(Error::InvalidPath { path: absolute })
    }
}

fn absolutize<F>(path: &Path, current_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let base = current_dir().map_err(|source| Error::Io {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(base.join(path))
}

/// List the `.bin` files directly inside a directory
pub fn matrix_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if !has_matrix_extension(&path) {
            continue;
        }
        if entry.file_type().map_err(io_err)?.is_dir() {
            debug!(path = %path.display(), "Skipping directory with matrix extension");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Resolve a path to the ordered list of files to print
pub fn resolve_targets<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let files = match classify(path)? {
        Target::File(file) => vec![file],
        Target::Directory(dir) => matrix_files_in(&dir)?,
    };
    for file in &files {
        debug!(path = %file.display(), "Resolved matrix file");
    }
    Ok(files)
}
