use crate::options::CharsetOptionsError;
use crate::types::StaticString;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharsetError {
    #[error("{operation} requires at least one character set pattern")]
    EmptyPatternList { operation: StaticString },
    #[error(transparent)]
    Options(#[from] CharsetOptionsError),
}

pub type CharsetResult<T> = Result<T, CharsetError>;
