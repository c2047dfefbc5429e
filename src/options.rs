use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::{DEFAULT_ESCAPE_CHAR, DEFAULT_NEGATION_CHAR, DEFAULT_RANGE_CHAR, Syntax};
use crate::types::{CodePoint, StaticString};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CharsetOptions {
    pub escape_char: CodePoint,
    pub negation_char: CodePoint,
    pub range_char: CodePoint,
    pub debug: bool,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            escape_char: DEFAULT_ESCAPE_CHAR,
            negation_char: DEFAULT_NEGATION_CHAR,
            range_char: DEFAULT_RANGE_CHAR,
            debug: false,
        }
    }
}

impl CharsetOptions {
    pub fn builder() -> CharsetOptionsBuilder {
        CharsetOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), CharsetOptionsError> {
        let roles: [(StaticString, CodePoint); 3] = [
            ("escape", self.escape_char),
            ("negation", self.negation_char),
            ("range", self.range_char),
        ];
        for (i, &(first, a)) in roles.iter().enumerate() {
            for &(second, b) in &roles[i + 1..] {
                if a == b {
                    return Err(CharsetOptionsError::ConflictingMetaChar {
                        value: a,
                        first,
                        second,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn syntax(&self) -> Syntax {
        Syntax {
            escape: self.escape_char,
            negation: self.negation_char,
            range: self.range_char,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CharsetOptionsBuilder {
    options: CharsetOptions,
}

impl CharsetOptionsBuilder {
    pub fn escape_char(mut self, value: CodePoint) -> Self {
        self.options.escape_char = value;
        self
    }

    pub fn negation_char(mut self, value: CodePoint) -> Self {
        self.options.negation_char = value;
        self
    }

    pub fn range_char(mut self, value: CodePoint) -> Self {
        self.options.range_char = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<CharsetOptions, CharsetOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharsetOptionsError {
    #[error("'{value}' cannot be both the {first} and the {second} character")]
    ConflictingMetaChar {
        value: CodePoint,
        first: StaticString,
        second: StaticString,
    },
}
