use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::types::CodePoint;

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;

/// Inclusive, lazily stepped span of Unicode scalar values.
///
/// Endpoints always come from `char`s, so neither bound ever sits inside the
/// surrogate block; stepping jumps over it in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    next: u32,
    last: u32,
}

impl Default for CodePointRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl CodePointRange {
    /// `first > last` yields an empty range.
    pub fn new(first: CodePoint, last: CodePoint) -> Self {
        Self {
            next: first as u32,
            last: last as u32,
        }
    }

    pub const fn empty() -> Self {
        Self { next: 1, last: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.next > self.last
    }

    pub fn start(&self) -> Option<CodePoint> {
        if self.is_empty() {
            return None;
        }
        char::from_u32(self.next)
    }

    pub fn end(&self) -> Option<CodePoint> {
        if self.is_empty() {
            return None;
        }
        char::from_u32(self.last)
    }

    pub fn contains(&self, c: CodePoint) -> bool {
        let v = c as u32;
        !self.is_empty() && self.next <= v && v <= self.last
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut n = (self.last - self.next + 1) as usize;
        if self.next < SURROGATE_FIRST && self.last > SURROGATE_LAST {
            n -= (SURROGATE_LAST - SURROGATE_FIRST + 1) as usize;
        }
        n
    }

    /// Feeds every member to `f` in ascending order until it breaks.
    pub fn try_each<B, F>(self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(CodePoint) -> ControlFlow<B>,
    {
        for c in self {
            if let ControlFlow::Break(b) = f(c) {
                return ControlFlow::Break(b);
            }
        }
        ControlFlow::Continue(())
    }
}

impl Iterator for CodePointRange {
    type Item = CodePoint;

    fn next(&mut self) -> Option<CodePoint> {
        if self.is_empty() {
            return None;
        }
        let c = char::from_u32(self.next)?;
        self.next = if self.next == SURROGATE_FIRST - 1 {
            SURROGATE_LAST + 1
        } else {
            self.next + 1
        };
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for CodePointRange {
    fn next_back(&mut self) -> Option<CodePoint> {
        if self.is_empty() {
            return None;
        }
        let c = char::from_u32(self.last)?;
        if self.last == self.next {
            *self = Self::empty();
        } else if self.last == SURROGATE_LAST + 1 {
            self.last = SURROGATE_FIRST - 1;
        } else {
            self.last -= 1;
        }
        Some(c)
    }
}

impl ExactSizeIterator for CodePointRange {}

impl FusedIterator for CodePointRange {}
