//! Post record type and canonical byte layout
//!
//! Every post is persisted as one account whose data follows a single
//! canonical layout:
//!
//! - The leading discriminator identifies the record type among
//!   heterogeneous accounts sharing one address space
//! - Fixed-width fields (author, timestamp) precede all variable-length
//!   fields, so their offsets are compile-time constants
//! - Variable-length fields are length-prefixed; the content offset depends
//!   on the stored topic length and is computed per buffer, never cached
//!
//! # Invariants Enforced
//!
//! - Discriminator verified before any other byte is interpreted
//! - `offset(author)` and `offset(timestamp)` identical across all records
//! - Serialization is deterministic

mod layout;
mod post;

pub use layout::{
    content_len_offset, content_offset, AUTHOR_LEN, AUTHOR_OFFSET, DISCRIMINATOR_LEN,
    MAX_RECORD_LEN, STRING_LEN_PREFIX, TIMESTAMP_LEN, TIMESTAMP_OFFSET, TOPIC_LEN_OFFSET,
    TOPIC_OFFSET,
};
pub use post::{AuthorId, Post};
