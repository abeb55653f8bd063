//! pmatrix - print .bin matrix files as tables, summaries or LaTeX

use anyhow::{Context, Result};
use pmatrix::cli::Args;
use pmatrix::{logging, print_all, ReadConfig};

fn main() {
    if let Err(e) = logging::init_logging("warn") {
        eprintln!("Warning: {e}");
    }

    let args = Args::parse_lenient(std::env::args_os());
    if args.wants_help() {
        if let Err(e) = Args::print_help() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ReadConfig::from_env().context("Failed to read configuration")?;
    let path = args.path.as_deref().context("No path given")?;

    let mut out = std::io::stdout().lock();
    print_all(path, args.options().mode(), &config, &mut out)?;
    Ok(())
}
