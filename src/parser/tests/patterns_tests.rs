use super::{child_symbols, parse_str};
use crate::Symbol;

fn pattern_of(tree: &crate::Tree) -> usize {
    let rule = tree.walk_child(tree.root(), 0);
    let i = child_symbols(tree, rule)
        .iter()
        .position(|s| *s == Symbol::Pattern)
        .expect("rule has a pattern child");
    tree.walk_child(rule, i)
}

#[test]
fn pattern_with_two_alternatives() {
    let (source, tree) = parse_str("A = 'a' | 'b';");
    assert_eq!(source.errors(), 0);
    let pattern = pattern_of(&tree);
    assert_eq!(child_symbols(&tree, pattern), vec![Symbol::Alternative, Symbol::Alternative]);
}

#[test]
fn alternative_concatenates_units() {
    let (source, tree) = parse_str("A = 'a' 'b' 'c';");
    assert_eq!(source.errors(), 0);
    let pattern = pattern_of(&tree);
    let alt = tree.walk_child(pattern, 0);
    assert_eq!(child_symbols(&tree, alt), vec![Symbol::Set, Symbol::Set, Symbol::Set]);
}

#[test]
fn unit_dispatch_covers_every_modifier() {
    let (source, tree) = parse_str("A = ?'a' *'b' +'c' 3'd' (\"e\") !'f' B;");
    assert_eq!(source.errors(), 0);
    let pattern = pattern_of(&tree);
    let alt = tree.walk_child(pattern, 0);
    assert_eq!(
        child_symbols(&tree, alt),
        vec![
            Symbol::Optional,
            Symbol::ZeroOrMore,
            Symbol::OneOrMore,
            Symbol::FixedTimes,
            Symbol::Group,
            Symbol::NotSet,
            Symbol::Reference,
        ]
    );
}

#[test]
fn group_wraps_a_pattern() {
    let (source, tree) = parse_str("A = ('a' | 'b');");
    assert_eq!(source.errors(), 0);
    let pattern = pattern_of(&tree);
    let alt = tree.walk_child(pattern, 0);
    let group = tree.walk_child(alt, 0);
    assert_eq!(tree.at(group).symbol, Symbol::Group);
    assert_eq!(child_symbols(&tree, group), vec![Symbol::Pattern]);
}
