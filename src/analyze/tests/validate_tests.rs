use indoc::indoc;

use super::analyze_str;

#[test]
fn direct_left_recursion_is_reported_once() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = A 'x' | 'a';
    "});
    assert_eq!(source.diagnostics().texts(), vec!["Rule has left recursion!"]);
}

#[test]
fn left_recursion_in_a_non_leading_alternative_is_still_caught() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = 'a' | A;
    "});
    assert_eq!(source.diagnostics().texts(), vec!["Rule has left recursion!"]);
}

#[test]
fn indirect_left_recursion_is_reported_once_per_rule_in_the_cycle() {
    // A -> B -> C -> A: each rule's own DFS closes the loop back to itself.
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = B;
        B = C;
        C = A;
    "});
    assert_eq!(source.diagnostics().texts().len(), 3);
    assert!(source.diagnostics().texts().iter().all(|t| *t == "Rule has left recursion!"));
}

#[test]
fn reference_to_an_undefined_rule_is_an_error() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = B;
    "});
    assert_eq!(source.diagnostics().texts(), vec!["Reference to an undefined symbol!"]);
}

#[test]
fn identical_leading_literals_need_left_factoring() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = 'x' 'y' | 'x' 'z' | 'w';
    "});
    let texts = source.diagnostics().texts();
    assert!(texts.iter().all(|t| *t == "Alternatives need left factoring!"));
    assert_eq!(texts.len(), 2);
}

#[test]
fn overlapping_ranges_need_left_factoring() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = 'a'~'m' | 'f';
    "});
    assert!(source
        .diagnostics()
        .texts()
        .contains(&"Alternatives need left factoring!"));
}

#[test]
fn negated_digit_set_overlapping_a_non_digit_literal_needs_left_factoring() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = !'0'~'9' | 'a';
    "});
    assert!(source
        .diagnostics()
        .texts()
        .contains(&"Alternatives need left factoring!"));
}

#[test]
fn disjoint_alternatives_do_not_need_left_factoring() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = 'x' | 'y' | 'z';
    "});
    assert!(source.diagnostics().texts().is_empty());
}

#[test]
fn references_resolve_through_to_the_referenced_rules_first_unit() {
    let (source, _tree) = analyze_str(indoc! {"
        start A;
        A = B | 'b';
        B = 'b';
    "});
    assert_eq!(source.diagnostics().texts(), vec!["Alternatives need left factoring!", "Alternatives need left factoring!"]);
}
