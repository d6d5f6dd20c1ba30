//! Handler error types
//!
//! A thin wrapper: validation rejections and store conflicts keep their
//! own messages so callers can distinguish bad input from store verdicts.

use thiserror::Error;

use crate::store::StoreError;
use crate::validate::ValidationError;

/// Result type for handler operations
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Failures while admitting a post.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// Client input rejected before any state change
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store refused the write
    #[error(transparent)]
    Store(#[from] StoreError),
}
