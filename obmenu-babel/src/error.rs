//! Error types for menu conversion

use thiserror::Error;

/// Errors raised while reading or writing a menu format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The source document could not be parsed at all
    #[error("parse error: {0}")]
    ParseError(String),

    /// The format does not implement the requested direction
    #[error("not supported: {0}")]
    NotSupported(String),
}
