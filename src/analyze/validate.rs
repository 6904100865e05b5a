//! Pass 2: left recursion, left factoring and undefined-reference checks.

use indexmap::IndexSet;

use crate::diagnostics::Diagnostics;
use crate::source::SourceView;
use crate::symbol::Symbol;
use crate::tree::{NodePtr, Tree};

use super::definitions::{node_text, Definitions};
use super::first_set::{effective_first_unit, first_unit_equal};

pub(crate) fn run(source: &mut SourceView, tree: &Tree, defs: &Definitions) {
    let (bytes, diagnostics) = source.split_for_parsing();

    for i in 0..tree.size() {
        match tree.at(i).symbol {
            Symbol::Rule => check_left_recursion(bytes, tree, defs, diagnostics, i),
            Symbol::Pattern => check_left_factoring(bytes, tree, defs, diagnostics, i),
            Symbol::Reference => check_undefined_reference(bytes, tree, defs, diagnostics, i),
            _ => {}
        }
    }
}

fn check_left_recursion(bytes: &[u8], tree: &Tree, defs: &Definitions, diagnostics: &mut Diagnostics, rule: NodePtr) {
    let ident = tree.walk_child(rule, 0);
    let name = node_text(bytes, tree, ident);
    let mut checked = IndexSet::new();
    left_recursion_dfs(defs, diagnostics, &name, &name, &mut checked);
}

/// Each rule starts its own DFS with a fresh `checked` set, so a cycle of N
/// rules is reported once per rule in the cycle, each pointing at the
/// reference that closes the loop back to that rule.
fn left_recursion_dfs(
    defs: &Definitions,
    diagnostics: &mut Diagnostics,
    rule_name: &str,
    current: &str,
    checked: &mut IndexSet<String>,
) {
    let Some(refs) = defs.first_references.get(current) else {
        return;
    };
    for (callee, slice) in refs {
        if callee == rule_name {
            diagnostics.error(*slice, "Rule has left recursion!").emit();
        } else if !checked.contains(callee) {
            checked.insert(callee.clone());
            left_recursion_dfs(defs, diagnostics, rule_name, callee, checked);
        }
    }
}

fn check_left_factoring(
    bytes: &[u8],
    tree: &Tree,
    defs: &Definitions,
    diagnostics: &mut Diagnostics,
    pattern: NodePtr,
) {
    let alts: Vec<NodePtr> = tree.children(pattern).collect();
    let effective: Vec<Option<NodePtr>> = alts
        .iter()
        .map(|&alt| {
            if tree.at(alt).child_count == 0 {
                return None;
            }
            let first = tree.walk_child(alt, 0);
            let mut checked = IndexSet::new();
            effective_first_unit(tree, bytes, defs, first, &mut checked)
        })
        .collect();

    for i in 0..alts.len() {
        let Some(a) = effective[i] else { continue };
        for j in (i + 1)..alts.len() {
            let Some(b) = effective[j] else { continue };

            if first_unit_equal(tree, bytes, a, b) {
                diagnostics.error(tree.at(alts[i]).slice, "Alternatives need left factoring!").emit();
                diagnostics.error(tree.at(alts[j]).slice, "Alternatives need left factoring!").emit();
            }
        }
    }
}

fn check_undefined_reference(
    bytes: &[u8],
    tree: &Tree,
    defs: &Definitions,
    diagnostics: &mut Diagnostics,
    reference: NodePtr,
) {
    if tree.at(reference).child_count == 0 {
        return;
    }
    let ident = tree.walk_child(reference, 0);
    let name = node_text(bytes, tree, ident);
    if !defs.symbols.contains(&name) {
        diagnostics.error(tree.at(ident).slice, "Reference to an undefined symbol!").emit();
    }
}
