//! PMatrix - Print binary dense matrix files
//!
//! Reads `.bin` matrix files (row count, column count, then row-major
//! 32-bit signed integers) and prints them as a table, a dimension summary
//! or a LaTeX `bmatrix` block.
//!
//! ## Architecture
//!
//! - **pmatrix-core**: wire format, byte order and in-memory decoding (no I/O)
//! - **pmatrix**: file reading, path resolution, rendering and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pmatrix::{load_matrix, render, OutputMode, ReadConfig};
//!
//! fn example() -> pmatrix::Result<()> {
//!     let loaded = load_matrix("m0.bin", &ReadConfig::default())?;
//!     let mut out = std::io::stdout().lock();
//!     render(&loaded, OutputMode::Latex, &mut out).map_err(|source| pmatrix::Error::Io {
//!         path: "-".into(),
//!         source,
//!     })?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub use pmatrix_core::{display_width, ByteOrder, DenseMatrix, FormatError, MatrixHeader};

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
#[cfg(feature = "mmap")]
pub mod mmap_backend;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod resolve;

pub use config::{BatchPolicy, ReadConfig};
pub use error::{Error, Result};
pub use loader::{load_from_reader, load_matrix, LoadedMatrix};
#[cfg(feature = "mmap")]
pub use mmap_backend::load_matrix_mapped;
pub use pipeline::{print_all, print_matrix, BatchSummary};
pub use reader::BinaryReader;
pub use render::{render, write_head, write_latex, write_tabular, OutputMode};
pub use resolve::resolve_targets;
