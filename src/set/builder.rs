use super::CharSet;
use crate::pattern::CharPattern;
use crate::types::CharTable;

/// Folds patterns, left to right, into include/exclude tables.
///
/// The first positive pattern (or the first after a negated one) unions into
/// `include`; each further positive pattern intersects with it. Negated
/// patterns only ever add to `exclude`.
#[derive(Debug, Default, Clone)]
pub struct SetBuilder {
    include: CharTable,
    exclude: CharTable,
    intersect: bool,
    has_positive: bool,
    has_negated: bool,
}

impl SetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersect
    }

    #[tracing::instrument(level = "trace", skip(self, pattern), fields(pattern=%pattern.source()))]
    pub fn fold(&mut self, pattern: &CharPattern<'_>) -> &mut Self {
        let negated = pattern.is_negated();

        if negated {
            // A bare marker describes nothing to exclude.
            if pattern.body().is_empty() {
                return self;
            }
            for c in pattern.expand() {
                self.exclude.insert(c, true);
            }
            self.intersect = false;
            self.has_negated = true;
        } else if self.intersect {
            self.include.retain(|_, active| *active);
            for active in self.include.values_mut() {
                *active = false;
            }
            for c in pattern.expand() {
                if let Some(active) = self.include.get_mut(&c) {
                    *active = true;
                }
            }
        } else {
            for c in pattern.expand() {
                self.include.insert(c, true);
            }
            self.intersect = true;
            self.has_positive = true;
        }

        tracing::event!(
            tracing::Level::TRACE,
            operation = "fold",
            negated,
            intersect = self.intersect,
            include = self.include.len() as u64,
            exclude = self.exclude.len() as u64
        );

        self
    }

    pub fn build(self) -> CharSet {
        CharSet::new(
            self.include,
            self.exclude,
            self.has_negated && !self.has_positive,
        )
    }
}
