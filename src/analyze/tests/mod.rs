mod scenarios_tests;
mod validate_tests;

use crate::{analyze, parse, SourceView, Tree};

/// Parses and fully analyzes `src`, returning the source view (for its
/// diagnostic counters/texts) and the tree.
pub(super) fn analyze_str(src: &str) -> (SourceView, Tree) {
    let mut source = SourceView::new("test.dil", src.as_bytes().to_vec());
    let tree = parse(&mut source);
    analyze(&mut source, &tree);
    (source, tree)
}
