//! mindex CLI - index the top-level symbols of a Python codebase.
//!
//! Orchestrates the pipeline:
//!
//! 1. File Discovery: find Python files respecting .gitignore
//! 2. Symbol Extraction: parse each file with tree-sitter, extract symbols
//! 3. Rendering: print a tree, JSON, or flat listing
//!
//! Design philosophy:
//! - One file failing to parse never aborts the scan
//! - Output is deterministic (sorted discovery, ordered maps)
//! - JSON output carries the full record contract (name/type/line)

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mindex::{index_project, render, Format};

/// Index the top-level symbols of a Python codebase
///
/// mindex scans a directory (or a single file), extracts the declared
/// functions, classes, and module-level variables from each Python file,
/// and prints them as a mini-index.
///
/// Examples:
///   mindex .                     # Index the current directory
///   mindex src/app.py            # Index one file
///   mindex . --format json       # Machine-readable output
#[derive(Parser, Debug)]
#[command(name = "mindex")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// File or directory to index
    ///
    /// A directory is walked recursively (respecting .gitignore and
    /// skipping vendored trees like __pycache__ and venv). A file is
    /// indexed on its own.
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Output format
    ///
    /// tree   - indented directory listing with symbol names (default)
    /// json   - full symbol records, pretty-printed
    /// simple - one flat "path: names" line per file
    #[arg(short, long, value_enum, default_value = "tree")]
    format: Format,

    /// Print scan statistics to stderr
    ///
    /// Reports how many files were indexed and how many symbols were
    /// found. Useful when tuning ignore patterns.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = index_project(&cli.path)?;

    if cli.verbose {
        let symbol_count: usize = index.values().map(Vec::len).sum();
        eprintln!(
            "mindex: {} files, {} symbols",
            index.len(),
            symbol_count
        );
    }

    print!("{}", render(&index, cli.format));
    Ok(())
}
