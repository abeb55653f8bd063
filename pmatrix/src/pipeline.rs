//! Per-file and per-directory printing

use crate::config::{BatchPolicy, ReadConfig};
use crate::error::{Error, Result};
use crate::loader::load_matrix;
use crate::render::{render, OutputMode};
use crate::resolve::resolve_targets;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Files printed successfully
    pub printed: usize,
    /// Files that failed and were skipped
    pub skipped: usize,
}

/// Load one file, render it, then print a blank separator line
///
/// Nothing is written for a file that fails to load.
pub fn print_matrix<P, W>(path: P, mode: OutputMode, config: &ReadConfig, out: &mut W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let loaded = load_matrix(path, config)?;
    render(&loaded, mode, out).map_err(Error::output)?;
    writeln!(out).map_err(Error::output)
}

/// Print every matrix file a path resolves to, one at a time
pub fn print_all<P, W>(path: P, mode: OutputMode, config: &ReadConfig, out: &mut W) -> Result<BatchSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let files = resolve_targets(path)?;
    let mut summary = BatchSummary::default();

    for file in &files {
        match print_matrix(file, mode, config, out) {
            Ok(()) => summary.printed += 1,
            Err(err) => match config.batch_policy {
                BatchPolicy::Abort => return Err(err),
                BatchPolicy::Skip => {
                    warn!(path = %file.display(), error = %err, "Skipping matrix file");
                    summary.skipped += 1;
                }
            },
        }
    }

    out.flush().map_err(Error::output)?;
    info!(printed = summary.printed, skipped = summary.skipped, "Finished");

    if summary.skipped > 0 {
        return Err(Error::BatchFailed {
            failed: summary.skipped,
            total: files.len(),
        });
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_matrix(dir: &Path, name: &str, words: &[i32]) {
        fs::write(dir.join(name), bytemuck::cast_slice::<i32, u8>(words)).unwrap();
    }

    fn run(path: &Path, mode: OutputMode, config: &ReadConfig) -> (Result<BatchSummary>, String) {
        let mut out = Vec::new();
        let result = print_all(path, mode, config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_file_blank_line() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "m.bin", &[1, 2, 1, 2]);
        let (result, text) = run(&temp.path().join("m.bin"), OutputMode::Head, &ReadConfig::default());
        assert_eq!(result.unwrap(), BatchSummary { printed: 1, skipped: 0 });
        assert_eq!(text, "m.bin\nrows:    1\ncolumns: 2\n\n");
    }

    #[test]
    fn test_directory_ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "only.bin", &[1, 1, 5]);
        fs::write(temp.path().join("readme.md"), "not a matrix").unwrap();

        let (result, text) = run(temp.path(), OutputMode::Tabular, &ReadConfig::default());
        assert_eq!(result.unwrap().printed, 1);
        assert_eq!(text, "only.bin\nrows: 1\ncolumns: 1\n| 5 |\n\n");
    }

    #[test]
    fn test_latex_overrides_head() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "m.bin", &[1, 1, 3]);
        let mode = OutputMode::from_flags(true, true);
        let (result, text) = run(&temp.path().join("m.bin"), mode, &ReadConfig::default());
        result.unwrap();
        assert_eq!(text, "\\begin{bmatrix}\n 3 \n\\end{bmatrix}\n\n");
        assert!(!text.contains("rows:"));
    }

    #[test]
    fn test_truncated_prints_nothing() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "bad.bin", &[2, 2]);
        let (result, text) = run(&temp.path().join("bad.bin"), OutputMode::Tabular, &ReadConfig::default());
        assert!(matches!(result, Err(Error::Truncated { .. })));
        assert!(text.is_empty());
    }

    #[test]
    fn test_skip_policy_continues() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "bad.bin", &[2, 2, 1]);
        write_matrix(temp.path(), "good.bin", &[1, 1, 8]);

        let config = ReadConfig::default().with_batch_policy(BatchPolicy::Skip);
        let (result, text) = run(temp.path(), OutputMode::Head, &config);
        assert!(matches!(result, Err(Error::BatchFailed { failed: 1, total: 2 })));
        assert!(text.contains("good.bin\nrows:    1\ncolumns: 1\n\n"));
        assert!(!text.contains("bad.bin"));
    }

    #[test]
    fn test_abort_policy_stops() {
        let temp = TempDir::new().unwrap();
        write_matrix(temp.path(), "bad.bin", &[2, 2, 1]);
        let (result, _) = run(temp.path(), OutputMode::Head, &ReadConfig::default());
        assert!(matches!(result, Err(Error::Truncated { .. })));
    }
}
