//! Text renderers for decoded matrices
//!
//! Cells are padded by `max_width - display_width(value)` spaces, using the
//! matrix-wide maximum. This lines up columns for most inputs but is not a
//! true string-width measurement.

use crate::loader::LoadedMatrix;
use pmatrix_core::{display_width, DenseMatrix};
use std::io::{self, Write};

/// Which renderer runs for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Name, dimensions and a `|`-separated table
    #[default]
    Tabular,
    /// Name and dimensions only
    Head,
    /// A LaTeX `bmatrix` block
    Latex,
}

impl OutputMode {
    /// Pick the mode from CLI flags; LaTeX wins over head
    pub fn from_flags(head_only: bool, math_typeset: bool) -> Self {
        if math_typeset {
            OutputMode::Latex
        } else if head_only {
            OutputMode::Head
        } else {
            OutputMode::Tabular
        }
    }
}

/// Render a loaded matrix in the given mode
pub fn render<W: Write>(loaded: &LoadedMatrix, mode: OutputMode, out: &mut W) -> io::Result<()> {
    match mode {
        OutputMode::Tabular => write_tabular(&loaded.file_name(), &loaded.matrix, out),
        OutputMode::Head => write_head(&loaded.file_name(), &loaded.matrix, out),
        OutputMode::Latex => write_latex(&loaded.matrix, out),
    }
}

fn padding(matrix: &DenseMatrix, value: i32) -> usize {
    matrix.max_width().saturating_sub(display_width(value))
}

/// Print name, dimensions and every row as `| v | v |`
pub fn write_tabular<W: Write>(name: &str, matrix: &DenseMatrix, out: &mut W) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(out, "rows: {}", matrix.rows())?;
    writeln!(out, "columns: {}", matrix.columns())?;

    for row in matrix.rows_iter() {
        for &value in row {
            write!(out, "| {:pad$}{value} ", "", pad = padding(matrix, value))?;
        }
        writeln!(out, "|")?;
    }
    Ok(())
}

/// Print name and dimensions only
pub fn write_head<W: Write>(name: &str, matrix: &DenseMatrix, out: &mut W) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(out, "rows:    {}", matrix.rows())?;
    writeln!(out, "columns: {}", matrix.columns())
}

/// Print a `bmatrix` block for pasting into LaTeX or a CAS
pub fn write_latex<W: Write>(matrix: &DenseMatrix, out: &mut W) -> io::Result<()> {
    writeln!(out, "\\begin{{bmatrix}}")?;

    let last_row = matrix.rows().saturating_sub(1);
    for (i, row) in matrix.rows_iter().enumerate() {
        let last_col = row.len().saturating_sub(1);
        for (j, &value) in row.iter().enumerate() {
            let sep = if j == last_col { "" } else { "&" };
            write!(out, " {:pad$}{value} {sep}", "", pad = padding(matrix, value))?;
        }
        if i != last_row {
            writeln!(out, "\\\\ ")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "\\end{{bmatrix}}")
}
