use indoc::indoc;

use super::{child_symbols, parse_str};
use crate::Symbol;

#[test]
fn minimal_grammar_has_two_statements() {
    let (source, tree) = parse_str(indoc! {"
        start Main;
        Main = 'a';
    "});

    assert_eq!(source.errors(), 0);
    assert_eq!(source.warnings(), 0);
    assert_eq!(child_symbols(&tree, tree.root()), vec![Symbol::Start, Symbol::Rule]);
}

#[test]
fn output_directive_parses() {
    let (source, tree) = parse_str(r#"output "generated.rs";"#);
    assert_eq!(source.errors(), 0);
    assert_eq!(child_symbols(&tree, tree.root()), vec![Symbol::Output]);
}

#[test]
fn skip_directive_without_pattern_parses() {
    let (source, tree) = parse_str("skip;");
    assert_eq!(source.errors(), 0);
    let skip = tree.walk_child(tree.root(), 0);
    assert_eq!(tree.at(skip).child_count, 0);
}

#[test]
fn skip_directive_with_pattern_parses() {
    let (source, tree) = parse_str("skip ' ' | '\\n';");
    assert_eq!(source.errors(), 0);
    let skip = tree.walk_child(tree.root(), 0);
    assert_eq!(child_symbols(&tree, skip), vec![Symbol::Pattern]);
}

#[test]
fn rule_body_is_a_pattern() {
    let (source, tree) = parse_str("Main = 'a' 'b';");
    assert_eq!(source.errors(), 0);
    let rule = tree.walk_child(tree.root(), 0);
    let kinds = child_symbols(&tree, rule);
    assert_eq!(kinds[0], Symbol::Identifier);
    assert!(kinds.contains(&Symbol::Pattern));
}
