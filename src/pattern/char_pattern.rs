use super::{Expander, Syntax};
use crate::types::CodePoint;

/// One borrowed set specification, e.g. `"a-z"`, `"^aeiou"` or `"\\-_"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharPattern<'a> {
    source: &'a str,
    syntax: Syntax,
}

impl<'a> CharPattern<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_syntax(source, Syntax::DEFAULT)
    }

    pub fn with_syntax(source: &'a str, syntax: Syntax) -> Self {
        Self { source, syntax }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// A leading negation char, even with nothing after it.
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.source.starts_with(self.syntax.negation)
    }

    pub fn body(&self) -> &'a str {
        if self.is_negated() {
            &self.source[self.syntax.negation.len_utf8()..]
        } else {
            self.source
        }
    }

    /// Fresh cursor over the body; negation is left to the set builder.
    pub fn expand(&self) -> Expander<'a> {
        Expander::new(self.body(), self.syntax)
    }

    pub fn chars(&self) -> Vec<CodePoint> {
        self.expand().collect()
    }
}

impl<'a> From<&'a str> for CharPattern<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_requires_leading_marker() {
        assert!(CharPattern::new("^a").is_negated());
        assert!(!CharPattern::new("a^").is_negated());
        assert!(!CharPattern::new("\\^a").is_negated());
        assert!(!CharPattern::new("").is_negated());
    }

    #[test]
    fn bare_marker_is_negated_with_empty_body() {
        let pattern = CharPattern::new("^");
        assert!(pattern.is_negated());
        assert_eq!(pattern.body(), "");
        assert_eq!(pattern.chars(), Vec::<char>::new());
    }

    #[test]
    fn expansion_starts_after_marker() {
        assert_eq!(CharPattern::new("^a-c").chars(), vec!['a', 'b', 'c']);
        assert_eq!(CharPattern::new("^-a").chars(), vec!['-', 'a']);
        assert_eq!(CharPattern::new("^^").chars(), vec!['^']);
    }

    #[test]
    fn escaped_marker_is_a_plain_member() {
        assert_eq!(CharPattern::new("\\^ae").chars(), vec!['^', 'a', 'e']);
    }

    #[test]
    fn every_expand_call_restarts() {
        let pattern = CharPattern::new("ab-d");
        let mut first = pattern.expand();
        assert_eq!(first.next(), Some('a'));
        assert_eq!(pattern.expand().collect::<Vec<_>>(), vec!['a', 'b', 'c', 'd']);
        assert_eq!(first.collect::<Vec<_>>(), vec!['b', 'c', 'd']);
    }

    #[test]
    fn multibyte_negation_marker_is_stripped() {
        let syntax = Syntax {
            negation: '¬',
            ..Syntax::DEFAULT
        };
        let pattern = CharPattern::with_syntax("¬xy", syntax);
        assert!(pattern.is_negated());
        assert_eq!(pattern.body(), "xy");
    }
}
