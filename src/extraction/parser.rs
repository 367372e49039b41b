//! Parser adapter - tree-sitter-python behind a parse-or-fail contract.
//!
//! The rest of the crate treats the grammar as a black box: feed it text,
//! get back a syntax tree or a `ParseError`. Nothing outside this module
//! knows which parser implementation sits behind the interface.
//!
//! tree-sitter is error-tolerant by design: it never refuses input, it
//! produces a tree with ERROR/MISSING nodes instead. The adapter converts
//! that back into the contract the extractor needs by checking
//! `root_node().has_error()` after parsing - a tree containing any error
//! node is reported as `ParseError::InvalidSyntax`.

use once_cell::sync::Lazy;
use thiserror::Error;
use tree_sitter::{Language, Parser as TsParser, Tree};

/// The Python grammar, built once per process.
static PYTHON: Lazy<Language> = Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Failure kinds of the parser adapter. Two only: callers never distinguish
/// beyond "could not parse" - both degrade to an empty symbol list.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input text does not conform to the Python grammar.
    #[error("source text is not valid Python")]
    InvalidSyntax,
    /// Parser-internal fault (language mismatch, aborted parse). Collapsed
    /// into one kind so the boundary stays two-valued.
    #[error("parser failure: {0}")]
    Internal(String),
}

/// Python source parser. Owns a tree-sitter parser instance.
///
/// tree-sitter parsers are not thread-safe; hold one per thread (see the
/// thread-local in `extraction::symbols`).
pub struct PythonParser {
    parser: TsParser,
}

impl PythonParser {
    /// Create a parser configured for the Python grammar.
    pub fn new() -> Self {
        Self {
            parser: TsParser::new(),
        }
    }

    /// Parse source text into a syntax tree.
    ///
    /// Accepts arbitrary text - empty input, binary garbage, broken code -
    /// and never panics. An empty string is a valid (empty) Python module
    /// and parses successfully.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser
            .set_language(&PYTHON)
            .map_err(|e| ParseError::Internal(e.to_string()))?;

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Internal("parse returned no tree".into()))?;

        if tree.root_node().has_error() {
            return Err(ParseError::InvalidSyntax);
        }

        Ok(tree)
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}
