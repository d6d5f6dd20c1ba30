//! Validation error types
//!
//! The display strings are part of the external contract: clients match on
//! them verbatim, so they must never change.

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejections of client-supplied post fields.
///
/// Always recoverable: the caller may retry with corrected input. No state
/// is changed before validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Topic exceeds 50 characters
    #[error("The provided topic should be 50 characters long maximum.")]
    TopicTooLong,

    /// Content exceeds 280 characters
    #[error("The provided content should be 280 characters long maximum.")]
    ContentTooLong,
}
