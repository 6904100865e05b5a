//! Two-pass semantic analyzer: pass 1 collects definitions, pass 2
//! validates them against the whole tree.

mod definitions;
mod first_set;
mod validate;

#[cfg(test)]
mod tests;

use crate::source::SourceView;
use crate::tree::Tree;

pub fn analyze(source: &mut SourceView, tree: &Tree) {
    let defs = definitions::collect(source, tree);
    validate::run(source, tree, &defs);
}
