//! In-memory account store
//!
//! Backs tests and embedded use. All accounts live in a single map behind
//! an `RwLock`, so concurrent creations to distinct addresses never
//! conflict and readers never block each other.

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::{AccountStore, Address};

/// Account store holding every buffer in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<Address, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Address, Vec<u8>>> {
        // A poisoned lock means a writer panicked mid-insert; the map itself
        // is a plain HashMap and stays structurally valid.
        match self.accounts.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl AccountStore for MemoryStore {
    fn create_account(&self, address: Address, data: Vec<u8>) -> StoreResult<()> {
        let mut accounts = match self.accounts.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if accounts.contains_key(&address) {
            return Err(StoreError::AddressInUse(address));
        }
        accounts.insert(address, data);
        Ok(())
    }

    fn account(&self, address: &Address) -> Option<Vec<u8>> {
        self.read_guard().get(address).cloned()
    }

    fn accounts(&self) -> Vec<(Address, Vec<u8>)> {
        self.read_guard()
            .iter()
            .map(|(addr, data)| (*addr, data.clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.read_guard().len()
    }
}
