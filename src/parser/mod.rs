//! Hand-written recursive-descent parser with panic-mode error recovery.
//!
//! Every production in `grammar` follows the same try-parse protocol: open
//! a node, attempt the body, and on success close the node with its final
//! slice; on hard failure (nothing consumed) undo and report `false`; on a
//! failure after partial commitment, recover by reporting a diagnostic and
//! closing the node anyway so the caller never sees a cascading failure.

mod core;
mod grammar;

#[cfg(test)]
mod tests;

pub use self::core::Parser as ParserCore;

use crate::diagnostics::Diagnostics;
use crate::slice::Slice;
use crate::source::SourceView;
use crate::symbol::Symbol;
use crate::tree::{Node, Tree};

/// Owns the parse of one source file.
pub struct Parser<'src> {
    inner: core::Parser<'src>,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src mut SourceView) -> Self {
        let (bytes, diagnostics): (&'src [u8], &'src mut Diagnostics) = source.split_for_parsing();
        Self { inner: core::Parser::new(bytes, diagnostics) }
    }

    /// `root ::= skip* statement* end-of-input`.
    ///
    /// Total: always returns a tree. Parser errors land on the source's
    /// diagnostics, never as a `Result::Err`.
    pub fn parse(mut self) -> Tree {
        let p = &mut self.inner;
        let root_mark_pos = p.pos;
        let root = p.builder.push_last(Node::new(Symbol::Root, Slice::empty_at(0)));

        p.skip();
        while !p.eof() {
            if !grammar::statement(p) {
                break;
            }
            p.skip();
        }

        if !p.eof() {
            let garbage = Slice::new(p.pos as u32, p.source.len() as u32);
            p.diagnostics.error(garbage, "Unexpected characters in the file!").emit();
            p.pos = p.source.len();
        }

        p.builder.pop();
        p.builder.tree_mut().get_mut(root).slice.last = p.pos as u32;
        debug_assert_eq!(root_mark_pos, 0, "root always starts at position 0");

        self.inner.into_tree()
    }
}
