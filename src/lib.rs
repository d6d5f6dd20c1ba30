//! chirpdb - an append-only micro-post ledger
//!
//! Records are stored as independently addressable accounts with a fixed
//! byte layout, so clients can filter them by raw byte-range comparison
//! against the author identity or topic without full deserialization.

pub mod codec;
pub mod filter;
pub mod handler;
pub mod observability;
pub mod record;
pub mod store;
pub mod validate;
