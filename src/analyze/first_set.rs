//! Effective first-unit resolution and first-unit equality (structural or
//! character-class overlap), used for left recursion and left-factoring
//! checks.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::symbol::Symbol;
use crate::tree::{NodePtr, Tree};

use super::definitions::{find_pattern_child, node_text, Definitions};

/// Descends through modifiers, groups and references to find the terminal
/// unit (`Set`/`NotSet`/`String`) that effectively starts a unit. `checked`
/// guards against reference cycles; a cycle resolves to "no first unit"
/// rather than recursing forever (the cycle itself is reported separately
/// by the left-recursion check).
pub(crate) fn effective_first_unit(
    tree: &Tree,
    source: &[u8],
    defs: &Definitions,
    unit: NodePtr,
    checked: &mut IndexSet<String>,
) -> Option<NodePtr> {
    match tree.at(unit).symbol {
        Symbol::Optional | Symbol::ZeroOrMore | Symbol::OneOrMore => {
            if tree.at(unit).child_count == 0 {
                return None;
            }
            let inner = tree.walk_child(unit, 0);
            effective_first_unit(tree, source, defs, inner, checked)
        }
        Symbol::FixedTimes => {
            if tree.at(unit).child_count < 2 {
                return None;
            }
            let inner = tree.walk_child(unit, 1);
            effective_first_unit(tree, source, defs, inner, checked)
        }
        Symbol::Group => {
            let pattern = find_pattern_child(tree, unit)?;
            let first_alt = tree.children(pattern).next()?;
            first_unit_of_alternative(tree, source, defs, first_alt, checked)
        }
        Symbol::Reference => {
            if tree.at(unit).child_count == 0 {
                return None;
            }
            let ident = tree.walk_child(unit, 0);
            let name = node_text(source, tree, ident);
            if checked.contains(&name) {
                return None;
            }
            checked.insert(name.clone());
            let rule = *defs.rules.get(&name)?;
            let pattern = find_pattern_child(tree, rule)?;
            let first_alt = tree.children(pattern).next()?;
            first_unit_of_alternative(tree, source, defs, first_alt, checked)
        }
        Symbol::Set | Symbol::NotSet | Symbol::String => Some(unit),
        _ => Some(unit),
    }
}

fn first_unit_of_alternative(
    tree: &Tree,
    source: &[u8],
    defs: &Definitions,
    alternative: NodePtr,
    checked: &mut IndexSet<String>,
) -> Option<NodePtr> {
    if tree.at(alternative).child_count == 0 {
        return None;
    }
    let first = tree.walk_child(alternative, 0);
    effective_first_unit(tree, source, defs, first, checked)
}

/// Two first units conflict if they're structurally identical, or if both
/// resolve to character classes whose ranges overlap.
pub(crate) fn first_unit_equal(tree: &Tree, source: &[u8], a: NodePtr, b: NodePtr) -> bool {
    if tree.equal(source, a, b) {
        return true;
    }
    match (char_class(tree, source, a), char_class(tree, source, b)) {
        (Some(ca), Some(cb)) => overlaps(&ca, &cb),
        _ => false,
    }
}

struct CharClass {
    negated: bool,
    chars: HashSet<u8>,
}

fn overlaps(a: &CharClass, b: &CharClass) -> bool {
    match (a.negated, b.negated) {
        (false, false) => a.chars.intersection(&b.chars).next().is_some(),
        (false, true) => !a.chars.is_subset(&b.chars),
        (true, false) => !b.chars.is_subset(&a.chars),
        (true, true) => true,
    }
}

fn char_class(tree: &Tree, source: &[u8], ptr: NodePtr) -> Option<CharClass> {
    match tree.at(ptr).symbol {
        Symbol::Set => Some(CharClass { negated: false, chars: expand_set(tree, source, ptr) }),
        Symbol::NotSet => {
            let inner = tree.children(ptr).next()?;
            Some(CharClass { negated: true, chars: expand_set(tree, source, inner) })
        }
        Symbol::String => {
            let first_escaped = tree.children(ptr).find(|&c| tree.at(c).symbol == Symbol::Escaped)?;
            let mut chars = HashSet::new();
            chars.insert(escaped_char(tree, source, first_escaped));
            Some(CharClass { negated: false, chars })
        }
        _ => None,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Item {
    Char(u8),
    Tilde,
}

fn expand_set(tree: &Tree, source: &[u8], set: NodePtr) -> HashSet<u8> {
    let mut items = Vec::new();
    for child in tree.children(set) {
        match tree.at(child).symbol {
            Symbol::Escaped => items.push(Item::Char(escaped_char(tree, source, child))),
            Symbol::Terminal if tree.at(child).slice.text(source) == b"~" => items.push(Item::Tilde),
            _ => {}
        }
    }

    let mut chars = HashSet::new();
    let mut i = 0;
    while i < items.len() {
        if let Item::Char(lo) = items[i] {
            if items.get(i + 1) == Some(&Item::Tilde) {
                if let Some(&Item::Char(hi)) = items.get(i + 2) {
                    for b in lo..=hi {
                        chars.insert(b);
                    }
                    i += 3;
                    continue;
                }
            }
            chars.insert(lo);
        }
        i += 1;
    }
    chars
}

fn escaped_char(tree: &Tree, source: &[u8], escaped: NodePtr) -> u8 {
    let children: Vec<NodePtr> = tree.children(escaped).collect();
    if children.len() <= 1 {
        return children
            .first()
            .and_then(|&c| tree.at(c).slice.text(source).first().copied())
            .unwrap_or(0);
    }

    let rest = &children[1..];
    if rest.len() == 2 {
        let hi = hex_value(tree.at(rest[0]).slice.text(source)[0]);
        let lo = hex_value(tree.at(rest[1]).slice.text(source)[0]);
        hi * 16 + lo
    } else {
        match tree.at(rest[0]).slice.text(source)[0] {
            b't' => b'\t',
            b'n' => b'\n',
            other => other,
        }
    }
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}
