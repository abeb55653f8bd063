//! Command-line argument definitions using clap derive macros

use crate::render::OutputMode;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Flags the tool understands; anything else starting with `-` is dropped
pub const RECOGNIZED_FLAGS: [&str; 3] = ["--help", "--head", "--latex"];

/// Print matrices in the CS61C Project 2 format to stdout from .bin files
#[derive(Parser, Debug, Default)]
#[command(name = "pmatrix")]
#[command(long_about = None)]
#[command(disable_help_flag = true)]
#[command(after_help = NOTES)]
pub struct Args {
    /// Directory or .bin file to print
    #[arg(value_name = "DIR|FILE")]
    pub path: Option<PathBuf>,

    /// Display this message
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Display only the filename and dimensions
    #[arg(long)]
    pub head: bool,

    /// Print in LaTeX form. Overrides --head
    #[arg(long)]
    pub latex: bool,
}

/// Output selection derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Print only the file name and dimensions (`--head`)
    pub head_only: bool,
    /// Print a LaTeX block; takes priority over `head_only` (`--latex`)
    pub math_typeset: bool,
}

impl Options {
    /// Renderer to run for every file
    pub fn mode(&self) -> OutputMode {
        OutputMode::from_flags(self.head_only, self.math_typeset)
    }
}

impl Args {
    /// Parse after dropping unknown flags and extra positionals
    pub fn parse_lenient<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(filter_args(argv)).unwrap_or_else(|e| e.exit())
    }

    /// Whether usage should be printed instead of running
    pub fn wants_help(&self) -> bool {
        self.help || self.path.is_none()
    }

    /// Output options for the dispatcher
    pub fn options(&self) -> Options {
        Options {
            head_only: self.head,
            math_typeset: self.latex,
        }
    }

    /// Print usage text to stdout
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

fn filter_args<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = argv.next().into_iter().collect();
    let mut path_seen = false;

    for arg in argv {
        let text = arg.to_string_lossy().into_owned();
        if text.starts_with('-') && text.len() > 1 {
            if !RECOGNIZED_FLAGS.contains(&text.as_str()) {
                debug!(flag = %text, "Ignoring unrecognized flag");
            } else if !kept.contains(&arg) {
                kept.push(arg);
            }
        } else if !path_seen {
            path_seen = true;
            kept.push(arg);
        } else {
            debug!(arg = %text, "Ignoring extra argument");
        }
    }
    kept
}

/// Extra help shown after the option list
const NOTES: &str = r#"
Files must be .bin.
Do not use a wildcard (DIR/*). Use just DIR.

EXAMPLES:
    # Print every .bin file in a directory
    pmatrix tests/inputs

    # Dimensions only
    pmatrix m0.bin --head

    # Copy LaTeX form into Symbolab or Wolfram Alpha
    Powershell:   set-clipboard $(pmatrix m0.bin --latex)
    Mac zsh:      pmatrix m0.bin --latex | pbcopy

ENVIRONMENT:
    PMATRIX_BYTE_ORDER   native (default), little or big
    PMATRIX_ON_ERROR     abort (default) or skip
    PMATRIX_MMAP         1 to read files through a memory map
    RUST_LOG             log filter for stderr diagnostics
"#;
