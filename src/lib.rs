//! mindex - top-level Python symbol extraction for a mini-index.
//!
//! Extracts a flat list of declared symbols (functions, classes,
//! module-level variables) from Python source, for consumption by an
//! indexing/search layer.
//!
//! # Architecture
//!
//! ```text
//! File Discovery → Parsing → Symbol Extraction → Rendering
//!       ↓             ↓             ↓               ↓
//!    ignore      tree-sitter    tree walk +     tree / json /
//!    crate        -python      privacy filter   simple text
//! ```
//!
//! The core is `extraction::extract_symbols`: a total function from source
//! text to an ordered symbol list. Unparseable input yields an empty list
//! rather than an error - the indexing layer treats "no symbols" and
//! "could not parse" identically. Everything around it (discovery, the
//! project index, rendering) exists to serve the CLI.
//!
//! # Extraction rules
//!
//! - Walks every node of the tree in pre-order; `def`/`async def` and
//!   `class` definitions are emitted at any nesting depth.
//! - Assignments count only at column 0, the proxy for module level; each
//!   simple-identifier target becomes one variable symbol.
//! - Names starting with `_` are suppressed entirely.

pub mod discovery;
pub mod extraction;
pub mod index;
pub mod rendering;
pub mod types;

// Re-export the core surface
pub use extraction::{extract_symbols, is_private, ParseError, PythonParser};
pub use index::{index_project, ProjectIndex};
pub use rendering::{render, Format};
pub use types::{Symbol, SymbolKind};
