//! Store error types

use thiserror::Error;

use super::Address;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by the account store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The target address already holds an account
    #[error("address already in use: {0}")]
    AddressInUse(Address),
}
