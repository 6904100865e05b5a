//! Statement-level productions: the three directives and rule definitions.

use crate::symbol::Symbol;

use super::atoms;
use super::patterns;
use super::Parser;

/// `output ::= "output" skip+ string skip* ";"`
pub(super) fn output(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Output);
    if !p.match_keyword("output") {
        return p.hard_fail(mark);
    }
    p.skip();
    if !atoms::string(p) {
        let msg = p.expected_message("string");
        return p.recover(mark, msg);
    }
    p.skip();
    if !p.match_char(b';') {
        let msg = p.expected_message(";");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `start-dir ::= "start" skip+ pattern skip* ";"`
pub(super) fn start_dir(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Start);
    if !p.match_keyword("start") {
        return p.hard_fail(mark);
    }
    p.skip();
    if !patterns::pattern(p) {
        let msg = p.expected_message("pattern");
        return p.recover(mark, msg);
    }
    p.skip();
    if !p.match_char(b';') {
        let msg = p.expected_message(";");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `skip-dir ::= "skip" (skip+ pattern)? skip* ";"`
pub(super) fn skip_dir(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Skip);
    if !p.match_keyword("skip") {
        return p.hard_fail(mark);
    }
    let before_pattern = p.pos;
    p.skip();
    if !patterns::pattern(p) {
        p.pos = before_pattern;
    }
    p.skip();
    if !p.match_char(b';') {
        let msg = p.expected_message(";");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}

/// `rule ::= identifier skip* "=" skip* pattern skip* ";"`
pub(super) fn rule(p: &mut Parser) -> bool {
    let mark = p.enter(Symbol::Rule);
    if !atoms::identifier(p) {
        return p.hard_fail(mark);
    }
    p.skip();
    if !p.match_char(b'=') {
        let msg = p.expected_message("=");
        return p.recover(mark, msg);
    }
    p.skip();
    if !patterns::pattern(p) {
        let msg = p.expected_message("pattern");
        return p.recover(mark, msg);
    }
    p.skip();
    if !p.match_char(b';') {
        let msg = p.expected_message(";");
        return p.recover(mark, msg);
    }
    p.succeed(mark)
}
