//! Parser state and the primitives the grammar productions are built from.

use crate::builder::Builder;
use crate::diagnostics::Diagnostics;
use crate::slice::Slice;
use crate::symbol::Symbol;
use crate::tree::{Node, NodePtr, Tree};

/// A snapshot taken when a try-parse procedure enters: the position it
/// started at and the tree index of the node it opened. Both are needed
/// to undo the attempt on hard failure, or to close it on success.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pos: usize,
    node: NodePtr,
}

/// Hand-written recursive-descent parser over a byte slice, building a
/// lossless tree via [`Builder`] under the try-parse protocol described
/// in the grammar modules.
///
/// `pos` is the only source of truth for parse position — there is no
/// separate token stream or lookahead buffer; lexical atoms (identifiers,
/// numbers, escapes, skip runs) are recognized directly against bytes.
pub struct Parser<'src> {
    pub(super) source: &'src [u8],
    pub(super) pos: usize,
    pub(super) builder: Builder,
    pub(super) diagnostics: &'src mut Diagnostics,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src [u8], diagnostics: &'src mut Diagnostics) -> Self {
        Self { source, pos: 0, builder: Builder::new(), diagnostics }
    }

    pub(crate) fn into_tree(self) -> Tree {
        self.builder.into_tree()
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(super) fn current(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    pub(super) fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    /// The symbol of the production currently "in progress" — the open
    /// parent's symbol. Used for the context name in recovery diagnostics
    /// (`` Expected `;` in `Rule`! ``).
    pub(super) fn open_symbol(&self) -> Symbol {
        self.builder
            .open_parent()
            .map(|p| self.builder.tree().at(p).symbol)
            .unwrap_or(Symbol::Root)
    }

    // --- try-parse protocol -------------------------------------------------

    /// Enters a production: snapshots position, opens a node of `symbol`.
    pub(super) fn enter(&mut self, symbol: Symbol) -> Mark {
        let pos = self.pos;
        let node = self.builder.push_last(Node::new(symbol, Slice::empty_at(pos as u32)));
        Mark { pos, node }
    }

    /// Closes the open node successfully, stamping its final slice.
    pub(super) fn succeed(&mut self, mark: Mark) -> bool {
        self.builder.pop();
        self.builder.tree_mut().get_mut(mark.node).slice.last = self.pos as u32;
        true
    }

    /// Undoes a speculative production that consumed nothing: restores
    /// position and removes the node with no trace left in the tree.
    pub(super) fn hard_fail(&mut self, mark: Mark) -> bool {
        debug_assert_eq!(self.pos, mark.pos, "hard_fail called after input was consumed");
        self.pos = mark.pos;
        self.builder.pop();
        self.builder.remove_last();
        false
    }

    /// Formats the `` Expected `X` in `Y`! `` diagnostic, `Y` being the
    /// symbol of whatever production is currently open.
    pub(super) fn expected_message(&self, what: &str) -> String {
        format!("Expected `{}` in `{}`!", what, self.open_symbol())
    }

    /// Panic-mode recovery: report a diagnostic at the point of failure,
    /// consume any skip run already sitting there, and close the
    /// production as a (partial) success so the caller sees no cascading
    /// failure.
    ///
    /// This does not forcibly eat non-skip bytes looking for a resync
    /// point: in the common case (a single missing delimiter) position
    /// already sits at the start of whatever comes next, and eating
    /// bytes here would swallow the following construct. Byte-level
    /// garbage that truly doesn't belong anywhere surfaces instead as
    /// the single trailing-garbage diagnostic the root production emits.
    pub(super) fn recover(&mut self, mark: Mark, message: impl Into<String>) -> bool {
        let at = Slice::new(self.pos as u32, (self.pos + 1).min(self.source.len()) as u32);
        self.diagnostics.error(at, message).emit();
        self.skip();
        self.succeed(mark)
    }

    // --- terminal matchers ---------------------------------------------------

    /// Matches a single exact byte, appending a `Terminal` child on success.
    pub(super) fn match_char(&mut self, c: u8) -> bool {
        self.match_set(|b| b == c)
    }

    /// Matches one byte satisfying `pred`, appending a `Terminal` child.
    pub(super) fn match_set(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.current() {
            Some(b) if pred(b) => {
                let slice = Slice::new(self.pos as u32, self.pos as u32 + 1);
                self.pos += 1;
                self.builder.add(Node::new(Symbol::Terminal, slice));
                true
            }
            _ => false,
        }
    }

    /// Matches one byte NOT satisfying `pred` (and not at end of input).
    pub(super) fn match_not_set(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        self.match_set(|b| !pred(b))
    }

    /// Undoes a single `match_*` call made when position was `before`:
    /// restores position and removes the `Terminal` node it appended.
    /// Used where a unit is conditionally matched (e.g. a `~` that turns
    /// out not to be followed by a valid range end).
    pub(super) fn unmatch(&mut self, before: usize) {
        self.pos = before;
        self.builder.remove_last();
    }

    /// Matches an exact literal string, appending one `Terminal` child
    /// spanning the whole match.
    pub(super) fn match_literal(&mut self, lit: &str) -> bool {
        let bytes = lit.as_bytes();
        if self.source[self.pos..].starts_with(bytes) {
            let slice = Slice::new(self.pos as u32, self.pos as u32 + bytes.len() as u32);
            self.pos += bytes.len();
            self.builder.add(Node::new(Symbol::Terminal, slice));
            true
        } else {
            false
        }
    }

    /// Like `match_literal`, but only matches when not immediately
    /// followed by another identifier letter — used to disambiguate
    /// keywords (`start`) from identifier-like rule names that merely
    /// share a prefix.
    pub(super) fn match_keyword(&mut self, lit: &str) -> bool {
        let bytes = lit.as_bytes();
        if self.source[self.pos..].starts_with(bytes)
            && !self.peek(bytes.len()).is_some_and(|b| b.is_ascii_alphanumeric())
        {
            self.match_literal(lit)
        } else {
            false
        }
    }

    // --- skip -----------------------------------------------------------

    /// Length of one skip atom (a run of whitespace, or a `//` line
    /// comment) starting at the current position, or 0 if neither matches.
    /// Mirrors the original's two independent skip-atom recognizers
    /// tried in a loop, rather than one combined scan.
    fn skip_atom_len(&self) -> usize {
        if let Some(b) = self.current() {
            if is_whitespace(b) {
                return 1;
            }
        }
        if self.source[self.pos..].starts_with(b"//") {
            let mut len = 2;
            while self.source.get(self.pos + len).is_some_and(|&b| b != b'\n') {
                len += 1;
            }
            return len;
        }
        0
    }

    /// Consumes zero or more skip atoms. Skip runs are never represented
    /// as tree nodes: they advance `pos` silently.
    pub(super) fn skip(&mut self) {
        loop {
            let len = self.skip_atom_len();
            if len == 0 {
                break;
            }
            self.pos += len;
        }
    }

    /// Consumes one or more skip atoms; returns whether at least one was
    /// present.
    pub(super) fn skip_plus(&mut self) -> bool {
        let before = self.pos;
        self.skip();
        self.pos > before
    }
}

pub(super) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}
