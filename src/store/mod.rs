//! Account store boundary
//!
//! The distributed ledger that actually persists accounts is external to
//! this crate; the core talks to it through the `AccountStore` trait.
//! `MemoryStore` is the in-process implementation used for tests and
//! embedded use.
//!
//! # Design Principles
//!
//! - Create-if-absent: writing to an existing address fails, never
//!   overwrites
//! - No update or delete operations exist
//! - Scans snapshot the account set; concurrent creations may or may not
//!   be observed

mod errors;
mod memory;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Unique account address within the store's address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 32]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", STANDARD.encode(self.0))
    }
}

/// Storage backend holding raw account buffers.
pub trait AccountStore: Send + Sync {
    /// Persist `data` under a fresh address.
    ///
    /// Fails with `AddressInUse` if the address already holds an account;
    /// existing accounts are never overwritten.
    fn create_account(&self, address: Address, data: Vec<u8>) -> StoreResult<()>;

    /// Fetch one account's raw buffer, if present.
    fn account(&self, address: &Address) -> Option<Vec<u8>>;

    /// Snapshot every stored account.
    ///
    /// Enumeration order is unspecified.
    fn accounts(&self) -> Vec<(Address, Vec<u8>)>;

    /// Number of stored accounts.
    fn len(&self) -> usize;

    /// Whether the store holds no accounts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
