use indoc::indoc;

use super::analyze_str;
use crate::Symbol;

#[test]
fn scenario_a_minimal_well_formed_grammar_is_clean() {
    let (source, tree) = analyze_str(indoc! {"
        start Main;
        Main = 'a';
    "});
    assert_eq!(source.errors(), 0);
    assert_eq!(source.warnings(), 0);
    assert_eq!(tree.children(tree.root()).count(), 2);
}

#[test]
fn scenario_b_missing_start_is_the_only_diagnostic() {
    let (source, _tree) = analyze_str(indoc! {"
        Main = 'a';
    "});
    assert_eq!(source.diagnostics().texts(), vec!["Missing start symbol directive!"]);
}

#[test]
fn scenario_c_three_rule_indirect_cycle_yields_three_diagnostics() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = B;
        B = C;
        C = A;
    "});
    assert_eq!(source.diagnostics().texts().len(), 3);
}

#[test]
fn scenario_d_three_alternatives_one_conflicting_pair() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = 'x' 'y' | 'x' 'z' | 'w';
    "});
    assert_eq!(source.diagnostics().texts().len(), 2);
}

#[test]
fn scenario_e_missing_semicolon_recovers_into_the_next_rule() {
    let (source, tree) = analyze_str(indoc! {"
        start A
        A = 'a';
    "});
    assert_eq!(source.errors(), 1);
    let kinds: Vec<Symbol> = tree.children(tree.root()).map(|c| tree.at(c).symbol).collect();
    assert_eq!(kinds, vec![Symbol::Start, Symbol::Rule]);
}

#[test]
fn scenario_f_negated_set_overlaps_a_literal_inside_its_complement() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = !'0'~'9' | 'a';
    "});
    assert!(source
        .diagnostics()
        .texts()
        .contains(&"Alternatives need left factoring!"));
}
