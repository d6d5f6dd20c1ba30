//! Post creation handling
//!
//! The single entry point through which records are admitted. Flow:
//! validate input, stamp the fixed-size fields (author from the
//! authenticated signer, timestamp from the runtime clock), serialize,
//! persist as a new account.
//!
//! # Design Principles
//!
//! - Atomic admit-or-reject: on validation failure nothing is constructed
//!   and no store mutation occurs
//! - Author and timestamp come from trusted context, never from the client
//! - Duplicate-address conflicts are the store's verdict and pass through
//!   unchanged

mod clock;
mod errors;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{HandlerError, HandlerResult};

use crate::filter::{fetch_all, Memcmp, ScanOutcome};
use crate::observability::Logger;
use crate::record::{AuthorId, Post};
use crate::store::{AccountStore, Address};
use crate::validate::{validate_post, ValidationResult};

/// Build a post from already-authenticated inputs.
///
/// Pure: validates, then constructs. The caller supplies `timestamp` from
/// its trusted clock and `author` from the transaction's signer; this
/// function never re-derives either.
pub fn create_post(
    author: AuthorId,
    topic: String,
    content: String,
    timestamp: i64,
) -> ValidationResult<Post> {
    validate_post(&topic, &content)?;
    Ok(Post {
        author,
        timestamp,
        topic,
        content,
    })
}

/// Orchestrates creation and queries against an account store.
pub struct PostHandler<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: AccountStore> PostHandler<S> {
    /// Handler over `store`, stamping timestamps from the system clock.
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: AccountStore, C: Clock> PostHandler<S, C> {
    /// Handler with an explicit clock.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Admit a post and persist it under the caller-supplied fresh address.
    ///
    /// On validation failure the transaction is rejected before any store
    /// mutation; on an address conflict the store's error passes through.
    pub fn submit(
        &self,
        address: Address,
        author: AuthorId,
        topic: String,
        content: String,
    ) -> HandlerResult<Post> {
        let post = match create_post(author, topic, content, self.clock.unix_timestamp()) {
            Ok(post) => post,
            Err(err) => {
                Logger::warn(
                    "post_rejected",
                    &[("author", &author.to_string()), ("reason", &err.to_string())],
                );
                return Err(err.into());
            }
        };

        self.store.create_account(address, post.serialize())?;
        Logger::info(
            "post_created",
            &[
                ("address", &address.to_string()),
                ("author", &author.to_string()),
                ("topic", &post.topic),
            ],
        );
        Ok(post)
    }

    /// Scan stored posts, keeping those that match all `filters`.
    pub fn fetch_all(&self, filters: &[Memcmp]) -> ScanOutcome {
        fetch_all(&self.store, filters)
    }
}
