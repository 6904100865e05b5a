//! Incremental tree construction via a parent-index stack.

use crate::tree::{Node, NodePtr, Tree};

/// Thin adapter over [`Tree`] that tracks which node is the currently open
/// parent. The stack depth tracks the syntactic nesting depth of whatever
/// is being parsed; `parents.len()` at any moment equals how many
/// productions are currently "open" on the call stack.
#[derive(Debug, Default)]
pub struct Builder {
    tree: Tree,
    parents: Vec<NodePtr>,
}

impl Builder {
    pub fn new() -> Self {
        Self { tree: Tree::new(), parents: Vec::new() }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// The currently open parent, if any production is in progress.
    pub fn open_parent(&self) -> Option<NodePtr> {
        self.active_parent()
    }

    /// Consumes the builder, handing ownership of the finished tree to the
    /// caller (the parser, on return).
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    fn active_parent(&self) -> Option<NodePtr> {
        self.parents.last().copied()
    }

    /// Appends `node` and, if a parent is open, increments its child_count.
    /// Returns the index the node was stored at.
    pub fn add(&mut self, node: Node) -> NodePtr {
        let ptr = self.tree.append(node);
        if let Some(parent) = self.active_parent() {
            self.tree.get_mut(parent).child_count += 1;
        }
        ptr
    }

    /// Makes `i` the active parent.
    pub fn push(&mut self, i: NodePtr) {
        self.parents.push(i);
    }

    /// Appends `node` and immediately opens it as the new active parent —
    /// the common "enter a production" sequence from the try-parse
    /// protocol.
    pub fn push_last(&mut self, node: Node) -> NodePtr {
        let ptr = self.add(node);
        self.push(ptr);
        ptr
    }

    /// Closes the current parent.
    pub fn pop(&mut self) -> NodePtr {
        self.parents.pop().expect("pop() with no open parent")
    }

    /// Drops the last node from the tree and decrements the active
    /// parent's child_count. Used to undo a speculative `add`/`push_last`
    /// on a hard-failure rollback.
    pub fn remove_last(&mut self) {
        let removed = self.tree.pop().expect("remove_last() on an empty tree");
        debug_assert!(
            self.active_parent().is_none() || self.tree.size() > *self.parents.last().unwrap(),
            "remove_last() must undo a node that lies beyond its open parent"
        );
        if let Some(parent) = self.active_parent() {
            let count = &mut self.tree.get_mut(parent).child_count;
            debug_assert!(*count > 0, "child_count underflow on rollback");
            *count -= 1;
        }
        let _ = removed;
    }

    pub fn depth(&self) -> usize {
        self.parents.len()
    }
}
