//! A front-end for DIL, a small grammar description language.
//!
//! # Example
//!
//! ```
//! use dil::{analyze, parse, SourceView};
//!
//! let mut source = SourceView::new("grammar.dil", b"start A;\nA = 'a';\n".to_vec());
//! let tree = parse(&mut source);
//! analyze(&mut source, &tree);
//!
//! assert_eq!(source.errors(), 0);
//! ```
//!
//! This crate builds a lossless parse tree from `.dil` source and runs a
//! two-pass semantic analyzer over it (left-recursion detection,
//! left-factoring conflicts, redefinition and undefined-reference checks).
//! Code generation, file loading policy, and diagnostic rendering to a
//! terminal are deliberately kept as thin, separable layers — `parse` and
//! `analyze` never touch the filesystem or a terminal.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod builder;
pub mod diagnostics;
pub mod parser;
pub mod slice;
pub mod source;
pub mod symbol;
pub mod tree;

use std::path::PathBuf;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use slice::Slice;
pub use source::SourceView;
pub use symbol::Symbol;
pub use tree::{Node, NodePtr, Tree};

/// Errors the loader-facing parts of this crate surface. These are the
/// caller's failure modes (a missing file, non-UTF-8 bytes) — not grammar
/// errors, which are static diagnostics on [`SourceView`] and never
/// `Result::Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("{path} is not valid UTF-8")]
    NonUtf8 { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source.bytes()` into a tree. Total: never panics on malformed
/// input, and always returns a tree (possibly degenerate under heavy
/// recovery). Parse errors are recorded on `source` as diagnostics, not
/// returned.
pub fn parse(source: &mut SourceView) -> Tree {
    parser::Parser::new(source).parse()
}

/// Runs both analysis passes over `tree`, recording diagnostics on
/// `source`. Total: never panics, always returns once both passes
/// complete.
pub fn analyze(source: &mut SourceView, tree: &Tree) {
    analyze::analyze(source, tree)
}

/// Structural subtree equality, exposed for the analyzer and for tests.
pub fn tree_equal(source: &SourceView, tree: &Tree, a: NodePtr, b: NodePtr) -> bool {
    tree.equal(source.bytes(), a, b)
}

/// k-th child navigation, exposed for callers that want to walk a tree
/// without depending on [`Tree`]'s other internals.
pub fn tree_walk(tree: &Tree, parent: NodePtr, k: usize) -> NodePtr {
    tree.walk_child(parent, k)
}
