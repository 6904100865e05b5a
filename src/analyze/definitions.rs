//! Pass 1: collect rule/skip/start definitions and each rule's FIRST-position
//! referenced rule names.

use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::Diagnostics;
use crate::slice::Slice;
use crate::source::SourceView;
use crate::symbol::Symbol;
use crate::tree::{NodePtr, Tree};

/// State built by pass 1, consumed by pass 2.
#[derive(Debug, Default)]
pub(crate) struct Definitions {
    pub symbols: IndexSet<String>,
    /// Rule name -> (referenced rule name -> slice of its first occurrence).
    /// A rule's FIRST references come from the leading unit of every one of
    /// its alternatives, not just the first — direct left recursion in a
    /// non-leading alternative (`A = 'a' | A;`) must still be caught.
    pub first_references: IndexMap<String, IndexMap<String, Slice>>,
    pub rules: IndexMap<String, NodePtr>,
}

pub(crate) fn collect(source: &mut SourceView, tree: &Tree) -> Definitions {
    let mut defs = Definitions::default();
    let (bytes, diagnostics) = source.split_for_parsing();

    let mut start_seen = false;
    let mut any_skip_seen = false;
    let mut last_skip: Option<NodePtr> = None;

    for child in tree.children(tree.root()) {
        match tree.at(child).symbol {
            Symbol::Skip => {
                collect_skip(bytes, tree, diagnostics, &mut any_skip_seen, &mut last_skip, child)
            }
            Symbol::Start => {
                if start_seen {
                    diagnostics.error(tree.at(child).slice, "Multiple start symbol directives!").emit();
                } else {
                    start_seen = true;
                }
            }
            Symbol::Rule => collect_rule(bytes, tree, diagnostics, &mut defs, child),
            _ => {}
        }
    }

    if !start_seen {
        let whole_file = Slice::new(0, bytes.len() as u32);
        diagnostics.error(whole_file, "Missing start symbol directive!").emit();
    }

    defs
}

fn collect_skip(
    bytes: &[u8],
    tree: &Tree,
    diagnostics: &mut Diagnostics,
    any_skip_seen: &mut bool,
    last_skip: &mut Option<NodePtr>,
    skip: NodePtr,
) {
    let has_pattern = tree.at(skip).child_count > 0;
    if !*any_skip_seen && !has_pattern {
        diagnostics.warning(tree.at(skip).slice, "Redundant no skip directive!").emit();
    } else if let Some(prev) = *last_skip {
        if tree.equal(bytes, prev, skip) {
            diagnostics.warning(tree.at(skip).slice, "Redundant skip directive!").emit();
        }
    }
    *any_skip_seen = true;
    *last_skip = Some(skip);
}

fn collect_rule(bytes: &[u8], tree: &Tree, diagnostics: &mut Diagnostics, defs: &mut Definitions, rule: NodePtr) {
    let ident = tree.walk_child(rule, 0);
    let name = node_text(bytes, tree, ident);

    if defs.symbols.contains(&name) {
        diagnostics.error(tree.at(rule).slice, "Redefinition of the symbol!").emit();
        return;
    }

    let mut first_references = IndexMap::new();
    if let Some(pattern) = find_pattern_child(tree, rule) {
        for alt in tree.children(pattern) {
            if tree.at(alt).child_count == 0 {
                continue;
            }
            let first_unit = tree.walk_child(alt, 0);
            if tree.at(first_unit).symbol == Symbol::Reference && tree.at(first_unit).child_count > 0 {
                let ref_ident = tree.walk_child(first_unit, 0);
                let callee = node_text(bytes, tree, ref_ident);
                first_references.entry(callee).or_insert_with(|| tree.at(ref_ident).slice);
            }
        }
    }

    defs.first_references.insert(name.clone(), first_references);
    defs.symbols.insert(name.clone());
    defs.rules.insert(name, rule);
}

/// The first direct child of `parent` that is a `Pattern` node. Used both
/// for a rule's body and (with the group's first child) for a group's body.
pub(crate) fn find_pattern_child(tree: &Tree, parent: NodePtr) -> Option<NodePtr> {
    tree.children(parent).find(|&c| tree.at(c).symbol == Symbol::Pattern)
}

pub(crate) fn node_text(bytes: &[u8], tree: &Tree, node: NodePtr) -> String {
    String::from_utf8_lossy(tree.at(node).slice.text(bytes)).into_owned()
}
