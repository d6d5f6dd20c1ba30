//! Byte-range filter evaluation over stored records
//!
//! A predicate compares a literal byte sequence against a slice of the raw
//! stored buffer, so queries never deserialize records that cannot match.
//! Filtering is only sound against fields at constant offsets: author and
//! topic qualify, content does not (its offset varies with topic length).
//!
//! # Design Principles
//!
//! - A too-short buffer is a non-match, never an error
//! - Multiple predicates AND together; zero predicates match everything
//! - A corrupt record is reported and excluded, not allowed to fail the
//!   whole scan

use crate::codec::DecodeError;
use crate::observability::Logger;
use crate::record::{AuthorId, Post, AUTHOR_OFFSET, TOPIC_LEN_OFFSET, TOPIC_OFFSET};
use crate::store::{AccountStore, Address};

/// A raw byte-range equality predicate against a stored buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memcmp {
    /// Byte offset at which the comparison starts
    pub offset: usize,
    /// Literal bytes the buffer must contain at `offset`
    pub bytes: Vec<u8>,
}

impl Memcmp {
    /// Predicate at an arbitrary offset.
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Match posts written by `author`, at the author field's fixed offset.
    pub fn author(author: &AuthorId) -> Self {
        Self::new(AUTHOR_OFFSET, author.as_bytes().to_vec())
    }

    /// Match posts whose topic starts with `topic`, at the topic bytes'
    /// fixed offset.
    ///
    /// An exact-topic match additionally needs the length prefix; use
    /// [`Memcmp::topic_exact`] for that.
    pub fn topic_prefix(topic: &str) -> Self {
        Self::new(TOPIC_OFFSET, topic.as_bytes().to_vec())
    }

    /// Match posts whose topic equals `topic` exactly, by comparing the
    /// length prefix together with the topic bytes.
    pub fn topic_exact(topic: &str) -> Self {
        let mut bytes = (topic.len() as u32).to_le_bytes().to_vec();
        bytes.extend_from_slice(topic.as_bytes());
        Self::new(TOPIC_LEN_OFFSET, bytes)
    }

    fn discriminator() -> Self {
        Self::new(0, Post::discriminator().to_vec())
    }

    /// Whether `buf` contains this predicate's bytes at its offset.
    ///
    /// Returns false, never an error, when the buffer is too short to hold
    /// the compared range.
    pub fn matches(&self, buf: &[u8]) -> bool {
        let end = match self.offset.checked_add(self.bytes.len()) {
            Some(end) => end,
            None => return false,
        };
        match buf.get(self.offset..end) {
            Some(range) => range == self.bytes,
            None => false,
        }
    }
}

/// Result of a filtered scan over the store.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Decoded posts that matched every predicate, in store enumeration
    /// order
    pub posts: Vec<(Address, Post)>,
    /// Buffers that matched but failed to decode; indicates store
    /// corruption or an addressing bug
    pub corrupt: Vec<(Address, DecodeError)>,
}

/// Scan every stored post, keeping those that match all `filters`.
///
/// Only buffers carrying the post discriminator are considered, so other
/// record types sharing the address space are skipped without decoding.
/// Result ordering follows store enumeration and is unspecified.
pub fn fetch_all(store: &dyn AccountStore, filters: &[Memcmp]) -> ScanOutcome {
    let discriminator = Memcmp::discriminator();
    let mut outcome = ScanOutcome::default();

    for (address, buf) in store.accounts() {
        if !discriminator.matches(&buf) {
            continue;
        }
        if !filters.iter().all(|filter| filter.matches(&buf)) {
            continue;
        }
        match Post::deserialize(&buf) {
            Ok(post) => outcome.posts.push((address, post)),
            Err(err) => {
                Logger::error(
                    "record_skipped_corrupt",
                    &[
                        ("address", &address.to_string()),
                        ("reason", &err.to_string()),
                    ],
                );
                outcome.corrupt.push((address, err));
            }
        }
    }

    outcome
}
