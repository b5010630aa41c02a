//! Error types for the model text formats.

use thiserror::Error;

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while reading instance or solution text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid integer {token:?} while reading {field}")]
    InvalidInteger { field: &'static str, token: String },
}
