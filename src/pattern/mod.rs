mod char_pattern;
mod expander;
mod syntax;

pub use char_pattern::CharPattern;
pub use expander::Expander;
pub use syntax::{DEFAULT_ESCAPE_CHAR, DEFAULT_NEGATION_CHAR, DEFAULT_RANGE_CHAR, Syntax};

/// Lazily expands `pattern` with the default syntax, skipping a leading `^`.
pub fn expand(pattern: &str) -> Expander<'_> {
    CharPattern::new(pattern).expand()
}

pub fn is_negated(pattern: &str) -> bool {
    CharPattern::new(pattern).is_negated()
}
