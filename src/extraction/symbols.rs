//! Symbol extraction - the tree walk and its filtering rules.
//!
//! Given a parsed module, this walks every node in pre-order (depth-first,
//! via `TreeCursor`) and classifies three node kinds:
//!
//! - `function_definition` (`def` and `async def`): emitted wherever it
//!   appears - no depth check, so methods and nested functions surface too.
//! - `class_definition`: same rule.
//! - `assignment`: emitted only when the node starts at column 0, the proxy
//!   for "not inside any function or class body". Each simple-identifier
//!   target gets its own variable symbol; attribute/subscript targets are
//!   skipped silently. Chained assignments (`a = b = 1`) bind a name at
//!   every link, and a bare annotation (`x: int`) binds none.
//!
//! The function/class vs. assignment depth asymmetry is observable upstream
//! behavior and is preserved on purpose.
//!
//! Everything passes through one privacy filter: a name whose first
//! character is `_` is suppressed entirely, never emitted with a flag.
//!
//! The public entry point is total: malformed input degrades to an empty
//! symbol list, and a fault classifying one node skips that node rather
//! than aborting the walk.

use std::cell::RefCell;

use tree_sitter::Node;

use crate::extraction::parser::PythonParser;
use crate::types::{Symbol, SymbolKind};

thread_local! {
    /// Per-thread parser instance (tree-sitter parsers are not thread-safe).
    static PARSER: RefCell<PythonParser> = RefCell::new(PythonParser::new());
}

/// Check whether a name is private by convention.
///
/// One rule, no special cases: private iff the first character is an
/// underscore. `__dunder__` and all-underscore names fall under the same
/// single-character check.
pub fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Extract top-level symbols from Python source text.
///
/// This is the crate's core operation. It is a pure function of its input:
/// no caching, no I/O, no state shared across calls, and it never fails -
/// unparseable input (including binary garbage) yields an empty vec, by
/// policy rather than accident. The indexing layer treats "no symbols" and
/// "could not parse" identically.
///
/// Symbols are emitted in pre-order traversal order, which is deterministic
/// for a given input and matches source order for flat modules.
pub fn extract_symbols(source: &str) -> Vec<Symbol> {
    let tree = PARSER.with(|p| p.borrow_mut().parse(source));
    match tree {
        Ok(tree) => collect(tree.root_node(), source.as_bytes()),
        Err(_) => Vec::new(),
    }
}

/// Walk every node under `root` in pre-order and classify each one.
fn collect(root: Node, source: &[u8]) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    let mut cursor = root.walk();

    'walk: loop {
        classify(cursor.node(), source, &mut symbols);

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    symbols
}

/// Classify a single node, appending any symbols it declares.
///
/// A node that is missing an expected field or holds non-UTF8 text is
/// skipped; the walk continues.
fn classify(node: Node, source: &[u8], out: &mut Vec<Symbol>) {
    match node.kind() {
        "function_definition" => {
            if let Some(name) = named_definition(node, source) {
                out.push(Symbol::new(name, SymbolKind::Function, line_of(node)));
            }
        }
        "class_definition" => {
            if let Some(name) = named_definition(node, source) {
                out.push(Symbol::new(name, SymbolKind::Class, line_of(node)));
            }
        }
        "assignment" => {
            // Column 0 is the top-level proxy: an assignment inside any
            // function or class body is indented.
            if node.start_position().column != 0 {
                return;
            }
            // Chain links are handled below by their outermost statement;
            // don't classify them again on their own visit.
            if node.parent().is_some_and(|p| p.kind() == "assignment") {
                return;
            }
            let line = line_of(node);
            // A chained assignment (`a = b = 1`) nests each further target
            // as an assignment on the right; every link binds a name, so
            // walk the chain and collect each link's left-hand targets.
            // All of them share the outer statement's line.
            let mut current = node;
            loop {
                let Some(right) = current.child_by_field_name("right") else {
                    // Bare annotation (`x: int`) - no value bound, no symbol.
                    break;
                };
                if let Some(left) = current.child_by_field_name("left") {
                    for target in simple_targets(left) {
                        if let Ok(name) = target.utf8_text(source) {
                            if !is_private(name) {
                                out.push(Symbol::new(name, SymbolKind::Variable, line));
                            }
                        }
                    }
                }
                if right.kind() == "assignment" {
                    current = right;
                } else {
                    break;
                }
            }
        }
        // Imports, expressions, control flow, decorators, augmented
        // assignments: not declarations in this model.
        _ => {}
    }
}

/// Name of a function/class definition, after the privacy filter.
fn named_definition<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    if is_private(name) {
        return None;
    }
    Some(name)
}

/// Simple-identifier targets bound by an assignment left-hand side.
///
/// `X = 1` binds one; `a, b = 1, 2` binds through a pattern list and each
/// identifier element counts. Attribute access, subscripts, and starred or
/// nested patterns are not simple bindings and are dropped without error.
fn simple_targets(left: Node) -> Vec<Node> {
    match left.kind() {
        "identifier" => vec![left],
        "pattern_list" | "tuple_pattern" => {
            let mut cursor = left.walk();
            left.named_children(&mut cursor)
                .filter(|child| child.kind() == "identifier")
                .collect()
        }
        _ => Vec::new(),
    }
}

/// 1-indexed line of a node's first character.
fn line_of(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(symbols: &[Symbol]) -> Vec<&str> {
        symbols.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_is_private() {
        assert!(is_private("_helper"));
        assert!(is_private("__init__"));
        assert!(is_private("___"));
        assert!(!is_private("helper"));
        assert!(!is_private("x_"));
    }

    #[test]
    fn test_flat_module_scenario() {
        let source = "def foo(): pass\ndef _bar(): pass\nclass Baz: pass\nX = 1\n_Y = 2\n";
        let symbols = extract_symbols(source);
        assert_eq!(
            symbols,
            vec![
                Symbol::new("foo", SymbolKind::Function, 1),
                Symbol::new("Baz", SymbolKind::Class, 3),
                Symbol::new("X", SymbolKind::Variable, 4),
            ]
        );
    }

    #[test]
    fn test_invalid_syntax_yields_empty() {
        assert!(extract_symbols("def broken(:\n    pass\n").is_empty());
        assert!(extract_symbols("x = ((((").is_empty());
    }

    #[test]
    fn test_empty_source_yields_empty() {
        assert!(extract_symbols("").is_empty());
    }

    #[test]
    fn test_methods_and_nested_functions_are_emitted() {
        // No depth gate on function/class definitions: methods and inner
        // functions surface alongside their enclosing scopes.
        let source = "\
class Conn:
    def connect(self):
        def retry():
            pass
        return retry
";
        let symbols = extract_symbols(source);
        assert_eq!(names(&symbols), vec!["Conn", "connect", "retry"]);
        assert_eq!(symbols[0].kind, SymbolKind::Class);
        assert_eq!(symbols[1], Symbol::new("connect", SymbolKind::Function, 2));
        assert_eq!(symbols[2], Symbol::new("retry", SymbolKind::Function, 3));
    }

    #[test]
    fn test_private_names_suppressed_at_any_depth() {
        let source = "\
class _Hidden:
    def visible(self):
        pass

def outer():
    def _inner():
        pass
";
        let symbols = extract_symbols(source);
        assert_eq!(names(&symbols), vec!["visible", "outer"]);
    }

    #[test]
    fn test_indented_assignment_not_emitted() {
        let source = "\
def setup():
    local = 1
    return local

TOP = 2
";
        let symbols = extract_symbols(source);
        assert_eq!(names(&symbols), vec!["setup", "TOP"]);
        assert_eq!(symbols[1], Symbol::new("TOP", SymbolKind::Variable, 5));
    }

    #[test]
    fn test_multi_target_assignment() {
        let symbols = extract_symbols("a, b = 1, 2\n");
        assert_eq!(
            symbols,
            vec![
                Symbol::new("a", SymbolKind::Variable, 1),
                Symbol::new("b", SymbolKind::Variable, 1),
            ]
        );
    }

    #[test]
    fn test_non_identifier_targets_skipped() {
        let source = "\
obj = make()
obj.attr = 1
table[key] = 2
c, obj.d = 3, 4
";
        let symbols = extract_symbols(source);
        assert_eq!(names(&symbols), vec!["obj", "c"]);
    }

    #[test]
    fn test_lambda_binding_is_a_variable() {
        let symbols = extract_symbols("double = lambda x: x * 2\n");
        assert_eq!(symbols, vec![Symbol::new("double", SymbolKind::Variable, 1)]);
    }

    #[test]
    fn test_async_def_is_a_function() {
        let symbols = extract_symbols("async def fetch():\n    pass\n");
        assert_eq!(symbols, vec![Symbol::new("fetch", SymbolKind::Function, 1)]);
    }

    #[test]
    fn test_imports_and_control_flow_produce_nothing() {
        let source = "\
import os
from sys import path

for i in range(3):
    print(i)
";
        assert!(extract_symbols(source).is_empty());
    }

    #[test]
    fn test_chained_assignment_emits_every_target() {
        let symbols = extract_symbols("a = b = 1\n");
        assert_eq!(
            symbols,
            vec![
                Symbol::new("a", SymbolKind::Variable, 1),
                Symbol::new("b", SymbolKind::Variable, 1),
            ]
        );
    }

    #[test]
    fn test_chained_assignment_filters_private_links() {
        let symbols = extract_symbols("a = _b = c = 1\n");
        assert_eq!(names(&symbols), vec!["a", "c"]);
    }

    #[test]
    fn test_bare_annotation_binds_nothing() {
        let symbols = extract_symbols("x: int\ny: int = 1\n");
        assert_eq!(symbols, vec![Symbol::new("y", SymbolKind::Variable, 2)]);
    }

    #[test]
    fn test_augmented_assignment_not_a_declaration() {
        let source = "total = 0\ntotal += 1\n";
        let symbols = extract_symbols(source);
        assert_eq!(symbols, vec![Symbol::new("total", SymbolKind::Variable, 1)]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let source = "class A: pass\ndef b(): pass\nC = 1\n";
        let first = extract_symbols(source);
        let second = extract_symbols(source);
        assert_eq!(first, second);
    }

    #[test]
    fn test_decorated_function_line_points_at_def() {
        let source = "\
@cached
def lookup():
    pass
";
        let symbols = extract_symbols(source);
        assert_eq!(symbols, vec![Symbol::new("lookup", SymbolKind::Function, 2)]);
    }
}
