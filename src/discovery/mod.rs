//! Git-aware Python file discovery.
//!
//! Uses the `ignore` crate to respect .gitignore and walk directories in
//! parallel, with deterministic sorted output.

mod files;

pub use files::find_python_files;
