use std::ops::ControlFlow;

use crate::errors::{CharsetError, CharsetResult};
use crate::ops;
use crate::options::CharsetOptions;
use crate::pattern::{CharPattern, Expander};
use crate::set::{CharSet, SetBuilder};
use crate::types::{CodePoint, StaticString};

/// Pattern engine bound to one validated [`CharsetOptions`].
#[derive(Debug, Clone, Default)]
pub struct Charset {
    options: CharsetOptions,
}

impl Charset {
    pub fn new(options: Option<CharsetOptions>) -> CharsetResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CharsetOptions {
        &self.options
    }

    pub fn pattern<'a>(&self, source: &'a str) -> CharPattern<'a> {
        CharPattern::with_syntax(source, self.options.syntax())
    }

    pub fn expand<'a>(&self, pattern: &'a str) -> Expander<'a> {
        self.pattern(pattern).expand()
    }

    pub fn is_negated(&self, pattern: &str) -> bool {
        self.pattern(pattern).is_negated()
    }

    /// An empty pattern list yields a set with no members.
    pub fn build_predicate(&self, patterns: &[&str]) -> CharSet {
        let mut builder = SetBuilder::new();
        for source in patterns {
            builder.fold(&self.pattern(source));
        }
        let set = builder.build();

        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "build_predicate",
                patterns = ?patterns,
                complement = set.is_complement(),
                included = set.included().len() as u64,
                excluded = set.excluded().len() as u64
            );
        }

        set
    }

    fn require_set(&self, operation: StaticString, patterns: &[&str]) -> CharsetResult<CharSet> {
        if patterns.is_empty() {
            return Err(CharsetError::EmptyPatternList { operation });
        }
        Ok(self.build_predicate(patterns))
    }

    #[tracing::instrument(level = "trace", skip(self, text), fields(text_len=text.len() as u64))]
    pub fn count(&self, text: &str, patterns: &[&str]) -> CharsetResult<usize> {
        let set = self.require_set("count", patterns)?;
        Ok(ops::count(&set, text))
    }

    #[tracing::instrument(level = "trace", skip(self, text), fields(text_len=text.len() as u64))]
    pub fn delete(&self, text: &str, patterns: &[&str]) -> CharsetResult<String> {
        let set = self.require_set("delete", patterns)?;
        Ok(ops::delete(&set, text))
    }

    /// Collapses runs of identical members; with no patterns every run collapses.
    #[tracing::instrument(level = "trace", skip(self, text), fields(text_len=text.len() as u64))]
    pub fn squeeze(&self, text: &str, patterns: &[&str]) -> String {
        if patterns.is_empty() {
            return ops::squeeze(None, text);
        }
        let set = self.build_predicate(patterns);
        ops::squeeze(Some(&set), text)
    }

    #[tracing::instrument(level = "trace", skip(self, text), fields(text_len=text.len() as u64))]
    pub fn translate(&self, text: &str, from: &str, to: &str) -> String {
        ops::translate(&self.pattern(from), to, text)
    }

    /// Visits members of `text` with their byte offsets until `f` breaks.
    pub fn for_each_member<B, F>(
        &self,
        text: &str,
        patterns: &[&str],
        f: F,
    ) -> CharsetResult<Option<B>>
    where
        F: FnMut(usize, CodePoint) -> ControlFlow<B>,
    {
        let set = self.require_set("for_each_member", patterns)?;
        Ok(ops::for_each_member(&set, text, f))
    }
}
