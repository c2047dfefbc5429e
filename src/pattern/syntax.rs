use serde::{Deserialize, Serialize};

use crate::types::CodePoint;

pub const DEFAULT_ESCAPE_CHAR: CodePoint = '\\';
pub const DEFAULT_NEGATION_CHAR: CodePoint = '^';
pub const DEFAULT_RANGE_CHAR: CodePoint = '-';

/// Meta characters recognised inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syntax {
    pub escape: CodePoint,
    pub negation: CodePoint,
    pub range: CodePoint,
}

impl Syntax {
    pub const DEFAULT: Syntax = Syntax {
        escape: DEFAULT_ESCAPE_CHAR,
        negation: DEFAULT_NEGATION_CHAR,
        range: DEFAULT_RANGE_CHAR,
    };
}

impl Default for Syntax {
    fn default() -> Self {
        Self::DEFAULT
    }
}
