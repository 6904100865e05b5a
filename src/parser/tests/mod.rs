mod directives_tests;
mod patterns_tests;

use crate::{parse, SourceView, Symbol, Tree};

/// Parses `src` and returns the resulting tree plus the source view (so
/// tests can inspect `errors()`/`warnings()` alongside tree shape).
pub(super) fn parse_str(src: &str) -> (SourceView, Tree) {
    let mut source = SourceView::new("test.dil", src.as_bytes().to_vec());
    let tree = parse(&mut source);
    (source, tree)
}

pub(super) fn child_symbols(tree: &Tree, parent: usize) -> Vec<Symbol> {
    tree.children(parent).map(|c| tree.at(c).symbol).collect()
}
