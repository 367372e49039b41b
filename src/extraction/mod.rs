//! Symbol extraction from Python source using tree-sitter.
//!
//! Two pieces, one pass:
//! - `parser`: adapts tree-sitter-python to a parse-or-fail contract
//! - `symbols`: walks the tree and applies the filtering rules
//!
//! The seam between them is deliberate: the extractor only sees "a tree or
//! a parse failure", never tree-sitter's error-recovery details.

mod parser;
mod symbols;

pub use parser::{ParseError, PythonParser};
pub use symbols::{extract_symbols, is_private};
