use super::*;
use crate::slice::Slice;

#[test]
fn emit_increments_matching_counter() {
    let mut diags = Diagnostics::new();
    diags.error(Slice::new(0, 1), "Expected `;` in `Rule`!").emit();
    diags.warning(Slice::new(2, 2), "Redundant no skip directive!").emit();

    assert_eq!(diags.error_count(), 1);
    assert_eq!(diags.warning_count(), 1);
    assert_eq!(diags.len(), 2);
    assert!(!diags.is_clean());
}

#[test]
fn unemitted_builder_records_nothing() {
    let mut diags = Diagnostics::new();
    let _ = diags.error(Slice::new(0, 1), "dropped");
    assert!(diags.is_empty());
    assert_eq!(diags.error_count(), 0);
}

#[test]
fn plain_printer_does_not_panic_without_source_context() {
    let mut diags = Diagnostics::new();
    diags.error(Slice::new(0, 1), "Expected `;` in `Rule`!").emit();
    let rendered = diags.printer(b"A = 'a'").render();
    assert!(rendered.contains("Expected `;` in `Rule`!"));
}
