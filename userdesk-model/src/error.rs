use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidUserId(String),
    InvalidLanguageCode(String),
    EmptyLanguageSet,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidUserId(msg) => write!(f, "invalid user id: {msg}"),
            ModelError::InvalidLanguageCode(code) => {
                write!(f, "invalid language code: '{code}'")
            }
            ModelError::EmptyLanguageSet => {
                write!(f, "supported language set cannot be empty")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
