//! Error types for decline code parsing

use thiserror::Error;

/// Errors raised when turning a symbolic name into a [`DeclineCode`].
///
/// Classifying an integer never fails; an unrecognized integer is simply an
/// unknown decline. This type only covers name parsing, e.g. telemetry tags
/// read back from storage.
///
/// [`DeclineCode`]: crate::DeclineCode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDeclineCodeError {
    /// Name is not in the decline table
    #[error("Unknown decline code name: {0}")]
    UnknownName(String),

    /// Empty input
    #[error("Decline code name is empty")]
    Empty,
}

/// Result type for decline code parsing
pub type ParseResult<T> = Result<T, ParseDeclineCodeError>;
