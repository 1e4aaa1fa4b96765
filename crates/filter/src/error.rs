use expr_syntax::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("parsing_error: {0}")]
    Parsing(#[from] ParseError),

    #[error("unknown_identifier: {0}")]
    UnknownIdentifier(String),

    #[error("unsupported_operation: {0}")]
    UnsupportedOperation(String),

    /// The filter translated, but does not evaluate to a boolean.
    #[error("invalid filter")]
    InvalidFilter,
}

impl TranslateError {
    pub fn is_parsing_error(&self) -> bool {
        matches!(self, TranslateError::Parsing(_))
    }

    pub fn is_unknown_identifier(&self) -> bool {
        matches!(self, TranslateError::UnknownIdentifier(_))
    }

    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, TranslateError::UnsupportedOperation(_))
    }

    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, TranslateError::InvalidFilter)
    }
}
