use std::iter::FusedIterator;
use std::str::Chars;

use super::Syntax;
use crate::range::CodePointRange;
use crate::types::{CodePoint, Lookahead};

const LOOKAHEAD: usize = 3;

/// Pull-based cursor over the members literally described by a pattern body.
///
/// Reads at most three code points ahead. A recognised `A-B` range is held as
/// a [`CodePointRange`] and drained one value per call before any further
/// input is read, so `"\0-\u{10FFFF}"` never allocates more than the window.
#[derive(Debug, Clone)]
pub struct Expander<'a> {
    input: Chars<'a>,
    buffer: Lookahead,
    pending: CodePointRange,
    syntax: Syntax,
}

impl<'a> Expander<'a> {
    /// `body` must already have any negation marker stripped.
    pub fn new(body: &'a str, syntax: Syntax) -> Self {
        Self {
            input: body.chars(),
            buffer: Lookahead::new(),
            pending: CodePointRange::empty(),
            syntax,
        }
    }

    fn fill(&mut self) {
        while self.buffer.len() < LOOKAHEAD {
            match self.input.next() {
                Some(c) => self.buffer.push(c),
                None => break,
            }
        }
    }

    fn drain(&mut self, count: usize) {
        let count = count.min(self.buffer.len());
        self.buffer.drain(..count);
    }
}

impl Iterator for Expander<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }

            self.fill();

            let first = *self.buffer.first()?;

            match self.buffer.len() {
                1 => {
                    self.drain(1);
                    return Some(first);
                }
                2 => {
                    if first == self.syntax.escape {
                        let escaped = self.buffer[1];
                        self.drain(2);
                        return Some(escaped);
                    }
                    self.drain(1);
                    return Some(first);
                }
                _ => {}
            }

            let mut c = first;

            // The escaped char moves to the front and may still open a range.
            if first == self.syntax.escape {
                c = self.buffer[1];
                self.drain(1);
                self.fill();
            }

            if self.buffer.len() < LOOKAHEAD || self.buffer[1] != self.syntax.range {
                self.drain(1);
                return Some(c);
            }

            self.pending = CodePointRange::new(self.buffer[0], self.buffer[2]);
            self.drain(LOOKAHEAD);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Unread input may still hold reversed (empty) or arbitrarily wide ranges.
        (self.pending.len(), None)
    }
}

impl FusedIterator for Expander<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(body: &str) -> Vec<char> {
        Expander::new(body, Syntax::default()).collect()
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert_eq!(expand(""), Vec::<char>::new());
    }

    #[test]
    fn literals_pass_through() {
        assert_eq!(expand("a"), vec!['a']);
        assert_eq!(expand("ab"), vec!['a', 'b']);
    }

    #[test]
    fn range_expands_in_place() {
        assert_eq!(expand("ab-d"), vec!['a', 'b', 'c', 'd']);
        assert_eq!(expand("a-cx-z"), vec!['a', 'b', 'c', 'x', 'y', 'z']);
    }

    #[test]
    fn reversed_range_contributes_nothing() {
        assert_eq!(expand("z-a"), Vec::<char>::new());
        assert_eq!(expand("xz-ay"), vec!['x', 'y']);
    }

    #[test]
    fn lone_backslash_is_literal() {
        assert_eq!(expand("\\"), vec!['\\']);
        assert_eq!(expand("ab\\"), vec!['a', 'b', '\\']);
    }

    #[test]
    fn escaped_dash_breaks_range() {
        assert_eq!(expand("ab\\-d"), vec!['a', 'b', '-', 'd']);
    }

    #[test]
    fn escape_consumes_following_char() {
        assert_eq!(expand("a\\b"), vec!['a', 'b']);
        assert_eq!(expand("a\\\\b"), vec!['a', '\\', 'b']);
    }

    #[test]
    fn escaped_char_can_open_range() {
        assert_eq!(expand("a\\--/"), vec!['a', '-', '.', '/']);
    }

    #[test]
    fn range_may_end_on_backslash() {
        assert_eq!(expand("aZ-\\"), vec!['a', 'Z', '[', '\\']);
        assert_eq!(expand("aZ-\\\\b"), vec!['a', 'Z', '[', '\\', 'b']);
        assert_eq!(expand("Z-\\w"), vec!['Z', '[', '\\', 'w']);
    }

    #[test]
    fn dangling_dash_is_literal() {
        assert_eq!(expand("a-"), vec!['a', '-']);
        assert_eq!(expand("-a"), vec!['-', 'a']);
        assert_eq!(expand("-"), vec!['-']);
    }

    #[test]
    fn dash_can_bound_a_range() {
        assert_eq!(expand("--/"), vec!['-', '.', '/']);
        assert_eq!(expand("+--"), vec!['+', ',', '-']);
    }

    #[test]
    fn multibyte_ranges_expand() {
        assert_eq!(expand("α-γ"), vec!['α', 'β', 'γ']);
    }

    #[test]
    fn huge_range_is_stepped_lazily() {
        let mut iter = Expander::new("\0-\u{10FFFF}", Syntax::default());
        assert_eq!(iter.next(), Some('\0'));
        assert_eq!(iter.next(), Some('\u{1}'));
        assert!(iter.buffer.is_empty());
        assert_eq!(iter.pending.end(), Some(char::MAX));
    }

    #[test]
    fn custom_syntax_is_honoured() {
        let syntax = Syntax {
            escape: '%',
            negation: '!',
            range: '~',
        };
        let got: Vec<char> = Expander::new("a~c%~x-z", syntax).collect();
        assert_eq!(got, vec!['a', 'b', 'c', '~', 'x', '-', 'z']);
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let mut iter = Expander::new("a", Syntax::default());
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
