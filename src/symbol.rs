//! The closed set of tree-node kinds.

/// Kind tag carried by every [`crate::tree::Node`].
///
/// `Whitespace`, `Comment`, and `Literal` are part of the vocabulary this
/// enum is drawn from but are never constructed by the parser: skip runs
/// never become tree nodes (they are consumed silently, see
/// [`crate::parser::Parser::skip`]), and pattern bodies use `String`/`Set`
/// rather than a free-standing `Literal`. They stay in the enum because the
/// grammar description language they describe reserves the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Symbol {
    Root,

    Output,
    Start,
    Skip,
    Rule,

    Pattern,
    Alternative,
    Optional,
    ZeroOrMore,
    OneOrMore,
    FixedTimes,
    Group,

    Number,
    Literal,
    Set,
    NotSet,
    String,
    Reference,
    Escaped,
    Identifier,

    Whitespace,
    Comment,
    Terminal,
}

impl Symbol {
    /// True for the unit-producing symbols that `4.4`'s effective-first-unit
    /// table treats as terminal (no further descent possible).
    pub fn is_character_class(self) -> bool {
        matches!(self, Symbol::Set | Symbol::NotSet | Symbol::String)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
