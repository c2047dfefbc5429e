mod charset;
pub mod errors;
mod ops;
pub mod options;
pub mod pattern;
pub mod range;
pub mod set;
pub mod types;

pub use charset::Charset;
pub use errors::{CharsetError, CharsetResult};
pub use options::{CharsetOptions, CharsetOptionsBuilder, CharsetOptionsError};
pub use pattern::{CharPattern, Expander, Syntax, expand, is_negated};
pub use range::CodePointRange;
pub use set::{CharSet, SetBuilder, build_predicate};

/// Counts the chars of `text` that belong to every pattern's set.
pub fn count(text: &str, patterns: &[&str]) -> CharsetResult<usize> {
    Charset::default().count(text, patterns)
}

pub fn delete(text: &str, patterns: &[&str]) -> CharsetResult<String> {
    Charset::default().delete(text, patterns)
}

pub fn squeeze(text: &str, patterns: &[&str]) -> String {
    Charset::default().squeeze(text, patterns)
}

pub fn translate(text: &str, from: &str, to: &str) -> String {
    Charset::default().translate(text, from, to)
}
