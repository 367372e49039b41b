//! Output rendering - from a project index to text.
//!
//! Three formats, matching what downstream consumers expect:
//! - `tree`: indented directory/file listing with symbol names (default)
//! - `json`: full symbol records (`name`/`type`/`line`), pretty-printed
//! - `simple`: one flat `path: names` line per file
//!
//! All three iterate the index's BTreeMap order, so output is stable.

use std::collections::BTreeMap;

use clap::ValueEnum;

use crate::index::ProjectIndex;

/// Output format selector for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented directory tree with symbol names per file.
    Tree,
    /// Pretty-printed JSON, full symbol records.
    Json,
    /// Flat `path: names` lines.
    Simple,
}

/// Render a project index in the requested format.
pub fn render(index: &ProjectIndex, format: Format) -> String {
    match format {
        Format::Tree => render_tree(index),
        Format::Json => render_json(index),
        Format::Simple => render_simple(index),
    }
}

fn render_json(index: &ProjectIndex) -> String {
    // BTreeMap keys serialize in order; a failure here would mean a
    // non-string key, which the type rules out.
    serde_json::to_string_pretty(index).unwrap_or_else(|_| "{}".to_string())
}

fn render_simple(index: &ProjectIndex) -> String {
    let mut out = String::new();
    for (path, symbols) in index {
        if symbols.is_empty() {
            out.push_str(path);
        } else {
            let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
            out.push_str(&format!("{}: {}", path, names.join(", ")));
        }
        out.push('\n');
    }
    out
}

/// Nested directory structure rebuilt from flat path keys.
#[derive(Default)]
struct TreeLevel<'a> {
    entries: BTreeMap<&'a str, TreeEntry<'a>>,
}

enum TreeEntry<'a> {
    Dir(TreeLevel<'a>),
    File(Vec<&'a str>),
}

fn render_tree(index: &ProjectIndex) -> String {
    let mut root = TreeLevel::default();

    for (path, symbols) in index {
        let mut level = &mut root;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                let entry = level
                    .entries
                    .entry(part)
                    .or_insert_with(|| TreeEntry::Dir(TreeLevel::default()));
                level = match entry {
                    TreeEntry::Dir(next) => next,
                    // A file and directory sharing a name can't happen on a
                    // real filesystem; keep the file if it somehow does.
                    TreeEntry::File(_) => break,
                };
            } else {
                let names = symbols.iter().map(|s| s.name.as_str()).collect();
                level.entries.insert(part, TreeEntry::File(names));
            }
        }
    }

    let mut out = String::new();
    write_level(&root, 0, &mut out);
    out
}

fn write_level(level: &TreeLevel, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (name, entry) in &level.entries {
        match entry {
            TreeEntry::Dir(inner) => {
                out.push_str(&format!("{}- {}/\n", indent, name));
                write_level(inner, depth + 1, out);
            }
            TreeEntry::File(names) => {
                if names.is_empty() {
                    out.push_str(&format!("{}- {}\n", indent, name));
                } else {
                    out.push_str(&format!("{}- {}: {}\n", indent, name, names.join(", ")));
                }
            }
        }
    }
}
