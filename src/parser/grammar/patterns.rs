//! Pattern bodies: alternation, concatenation, and unit modifiers.

use crate::symbol::Symbol;

use super::atoms;
use super::Parser;

/// `pattern ::= alternative (skip* "|" skip* alternative)*`
pub(super) fn pattern(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Pattern);
    if !alternative(p) {
        return p.hard_fail(mark);
    }
    loop {
        let before = p.pos;
        p.skip();
        if !p.match_char(b'|') {
            p.pos = before;
            break;
        }
        p.skip();
        if !alternative(p) {
            let msg = p.expected_message("alternative");
            return p.recover(mark, msg);
        }
    }
    p.succeed(mark)
}

/// `alternative ::= unit (skip+ unit)*`
pub(super) fn alternative(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Alternative);
    if !unit(p) {
        return p.hard_fail(mark);
    }
    loop {
        let before = p.pos;
        if !p.skip_plus() {
            break;
        }
        if !unit(p) {
            p.pos = before;
            break;
        }
    }
    p.succeed(mark)
}

/// `unit ::= set | not-set | string | reference | group | fixed-times
///        | one-or-more | zero-or-more | optional`
pub(super) fn unit(p: &mut Parser) -> bool {
    atoms::set(p)
        || atoms::not_set(p)
        || atoms::string(p)
        || reference(p)
        || group(p)
        || fixed_times(p)
        || one_or_more(p)
        || zero_or_more(p)
        || optional(p)
}

/// `reference ::= identifier`
fn reference(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Reference);
    if !atoms::identifier(p) {
        return p.hard_fail(mark);
    }
    p.succeed(mark)
}

/// `group ::= "(" skip* pattern (skip+ pattern)* skip* ")"`
fn group(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Group);
    if !p.match_char(b'(') {
        return p.hard_fail(mark);
    }
    p.skip();
    if !pattern(p) {
        let msg = p.expected_message("pattern");
        return p.recover(mark, msg);
    }
    loop {
        let before = p.pos;
        if !p.skip_plus() {
            break;
        }
        if !pattern(p) {
            p.pos = before;
            break;
        }
    }
    p.skip();
    if !p.match_char(b')') {
        let msg = p.expected_message(")");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `fixed-times ::= number skip* unit`
fn fixed_times(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::FixedTimes);
    if !atoms::number(p) {
        return p.hard_fail(mark);
    }
    p.skip();
    if !unit(p) {
        let msg = p.expected_message("unit");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `optional ::= "?" skip* unit`
fn optional(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Optional);
    if !p.match_char(b'?') {
        return p.hard_fail(mark);
    }
    p.skip();
    if !unit(p) {
        let msg = p.expected_message("unit");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `zero-or-more ::= "*" skip* unit`
fn zero_or_more(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::ZeroOrMore);
    if !p.match_char(b'*') {
        return p.hard_fail(mark);
    }
    p.skip();
    if !unit(p) {
        let msg = p.expected_message("unit");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `one-or-more ::= "+" skip* unit`
fn one_or_more(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::OneOrMore);
    if !p.match_char(b'+') {
        return p.hard_fail(mark);
    }
    p.skip();
    if !unit(p) {
        let msg = p.expected_message("unit");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}
