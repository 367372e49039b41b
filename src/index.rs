//! Project indexing - discovery plus per-file extraction.
//!
//! Ties the discovery and extraction layers together: find Python files,
//! extract symbols from each in parallel, collect into a path-keyed map.
//! A `BTreeMap` keeps iteration order stable so rendered output is
//! reproducible.
//!
//! Failure policy matches the core: a file that can't be read or parsed
//! contributes an empty symbol list and a stderr warning, never an abort.
//! One bad file must not sink the whole scan.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use crate::discovery::find_python_files;
use crate::extraction::extract_symbols;
use crate::types::Symbol;

/// Symbols per file, keyed by path relative to the scan root.
pub type ProjectIndex = BTreeMap<String, Vec<Symbol>>;

/// Index every Python file under `root`.
///
/// Extraction runs in parallel across files; each rayon worker gets its own
/// thread-local parser. Keys are root-relative paths with `/` separators.
pub fn index_project(root: &Path) -> Result<ProjectIndex> {
    let files = find_python_files(root)?;

    let entries: Vec<(String, Vec<Symbol>)> = files
        .par_iter()
        .map(|path| {
            let symbols = match std::fs::read_to_string(path) {
                Ok(source) => extract_symbols(&source),
                Err(e) => {
                    eprintln!("warning: failed to read {}: {}", path.display(), e);
                    Vec::new()
                }
            };
            (relative_key(path, root), symbols)
        })
        .collect();

    Ok(entries.into_iter().collect())
}

/// Root-relative display key for a file, normalized to `/` separators.
fn relative_key(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    // A single-file root strips to nothing; fall back to the path itself.
    let rel = if rel.as_os_str().is_empty() { path } else { rel };
    let key = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        key.into_owned()
    } else {
        key.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolKind;
    use std::fs;

    #[test]
    fn test_index_project_collects_per_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("api.py"), "def handler(): pass\n").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg").join("util.py"), "LIMIT = 10\n").unwrap();

        let index = index_project(dir.path()).unwrap();
        let keys: Vec<_> = index.keys().cloned().collect();
        assert_eq!(keys, vec!["api.py", "pkg/util.py"]);

        assert_eq!(index["api.py"][0].kind, SymbolKind::Function);
        assert_eq!(index["pkg/util.py"][0].name, "LIMIT");
    }

    #[test]
    fn test_unparseable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.py"), "def broken(:\n").unwrap();

        let index = index_project(dir.path()).unwrap();
        assert!(index["broken.py"].is_empty());
    }

    #[test]
    fn test_single_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.py");
        fs::write(&file, "class One: pass\n").unwrap();

        let index = index_project(&file).unwrap();
        assert_eq!(index.len(), 1);
        let symbols = index.values().next().unwrap();
        assert_eq!(symbols[0].name, "One");
    }
}
