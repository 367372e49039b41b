//! Core types for mindex - the symbol records handed to the indexing layer.
//!
//! A `Symbol` is deliberately tiny: three fields, no file path, no parent
//! scope, no identity beyond its contents. Symbols are built transiently
//! during one extraction pass and handed off as a finished sequence; nothing
//! persists across calls.

use serde::{Deserialize, Serialize};

/// Kind of a declared symbol - a closed set for this core.
///
/// Serializes to the literal tags the indexing layer expects:
/// `"function"`, `"class"`, `"variable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// `def` / `async def` - any named function definition, including
    /// methods and nested functions (see the extractor's depth policy).
    Function,
    /// `class` definition.
    Class,
    /// Module-level variable bound by a column-0 assignment.
    Variable,
}

impl SymbolKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Variable => "variable",
        }
    }
}

/// One declared symbol: the sole output entity of extraction.
///
/// `kind` serializes under the wire name `type` to match the boundary
/// contract with the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier text as written in source. Never starts with `_`.
    pub name: String,
    /// Declaration kind.
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    /// 1-indexed source line where the declaring construct begins.
    pub line: u32,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, line: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}
