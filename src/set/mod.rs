mod builder;
mod char_set;

pub use builder::SetBuilder;
pub use char_set::CharSet;

use crate::pattern::CharPattern;

/// Folds `patterns` in call order into a single membership predicate.
pub fn build_predicate<'a, I, P>(patterns: I) -> CharSet
where
    I: IntoIterator<Item = P>,
    P: Into<CharPattern<'a>>,
{
    let mut builder = SetBuilder::new();
    for pattern in patterns {
        builder.fold(&pattern.into());
    }
    builder.build()
}
