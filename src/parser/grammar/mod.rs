//! Grammar productions, grouped by grammar area: directives (statement-
//! level), patterns (alternation/concatenation and unit modifiers), and
//! atoms (the leaf lexical forms).

mod atoms;
mod directives;
mod patterns;

use super::core::Parser;

/// `statement ::= output | start-dir | skip-dir | rule`
///
/// Tried in this fixed order: keyword-led forms first, `rule` last since
/// it's taken only when no keyword matches.
pub(super) fn statement(p: &mut Parser) -> bool {
    directives::output(p)
        || directives::start_dir(p)
        || directives::skip_dir(p)
        || directives::rule(p)
}
