use crate::types::{CharTable, CodePoint};

/// Membership predicate produced by [`SetBuilder`](super::SetBuilder).
///
/// Exclusion always wins. When only negated patterns were folded the include
/// side stands for every code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    include: CharTable,
    exclude: CharTable,
    complement: bool,
}

impl CharSet {
    pub(crate) fn new(include: CharTable, exclude: CharTable, complement: bool) -> Self {
        Self {
            include,
            exclude,
            complement,
        }
    }

    #[inline]
    pub fn contains(&self, c: CodePoint) -> bool {
        if self.exclude.get(&c).copied().unwrap_or(false) {
            return false;
        }
        self.complement || self.include.get(&c).copied().unwrap_or(false)
    }

    pub fn predicate(&self) -> impl Fn(CodePoint) -> bool + '_ {
        move |c| self.contains(c)
    }

    pub fn is_complement(&self) -> bool {
        self.complement
    }

    /// Active include members, excluded ones already removed.
    pub fn included(&self) -> Vec<CodePoint> {
        let mut out: Vec<CodePoint> = self
            .include
            .iter()
            .filter(|&(c, &active)| active && !self.exclude.contains_key(c))
            .map(|(&c, _)| c)
            .collect();
        out.sort_unstable();
        out
    }

    pub fn excluded(&self) -> Vec<CodePoint> {
        let mut out: Vec<CodePoint> = self
            .exclude
            .iter()
            .filter(|&(_, &active)| active)
            .map(|(&c, _)| c)
            .collect();
        out.sort_unstable();
        out
    }
}
