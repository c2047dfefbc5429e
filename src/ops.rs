use hashbrown::HashMap as FastHashMap;
use std::ops::ControlFlow;

use crate::pattern::{CharPattern, Expander};
use crate::set::{CharSet, build_predicate};
use crate::types::CodePoint;

pub(crate) fn count(set: &CharSet, text: &str) -> usize {
    text.chars().filter(|&c| set.contains(c)).count()
}

pub(crate) fn delete(set: &CharSet, text: &str) -> String {
    text.chars().filter(|&c| !set.contains(c)).collect()
}

/// `None` squeezes every run.
pub(crate) fn squeeze(set: Option<&CharSet>, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<CodePoint> = None;

    for c in text.chars() {
        if prev == Some(c) && set.is_none_or(|s| s.contains(c)) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

pub(crate) fn for_each_member<B, F>(set: &CharSet, text: &str, mut f: F) -> Option<B>
where
    F: FnMut(usize, CodePoint) -> ControlFlow<B>,
{
    for (offset, c) in text.char_indices() {
        if !set.contains(c) {
            continue;
        }
        if let ControlFlow::Break(b) = f(offset, c) {
            return Some(b);
        }
    }
    None
}

/// `to` is read without negation; an empty `to` deletes the members of `from`.
pub(crate) fn translate(from: &CharPattern<'_>, to: &str, text: &str) -> String {
    let syntax = from.syntax();

    if Expander::new(to, syntax).next().is_none() {
        return delete(&build_predicate([*from]), text);
    }

    if from.is_negated() {
        let set = build_predicate([*from]);
        let Some(fill) = Expander::new(to, syntax).last() else {
            return text.to_string();
        };
        return text
            .chars()
            .map(|c| if set.contains(c) { fill } else { c })
            .collect();
    }

    let mut table: FastHashMap<CodePoint, CodePoint> = FastHashMap::new();
    let mut targets = Expander::new(to, syntax);
    let mut fill: Option<CodePoint> = None;

    for c in from.expand() {
        if let Some(t) = targets.next() {
            fill = Some(t);
        }
        if let Some(t) = fill {
            table.entry(c).or_insert(t);
        }
    }

    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}
