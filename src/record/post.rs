//! The post record and its canonical serialization
//!
//! Wire format:
//!
//! ```text
//! +------------------+
//! | Discriminator    | (8 bytes, first 8 of SHA-256("account:Post"))
//! +------------------+
//! | Author           | (32-byte identity)
//! +------------------+
//! | Timestamp        | (i64 LE, unix seconds)
//! +------------------+
//! | Topic            | (length-prefixed UTF-8)
//! +------------------+
//! | Content          | (length-prefixed UTF-8)
//! +------------------+
//! ```
//!
//! The discriminator is checked before any other byte is interpreted, so a
//! buffer belonging to a different record type fails fast instead of being
//! misread as a post.

use std::fmt;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::codec::{ByteReader, ByteWriter, DecodeError, DecodeResult};

use super::layout::{DISCRIMINATOR_LEN, MAX_RECORD_LEN};

/// Account-tag preimage for the post discriminator.
const DISCRIMINATOR_TAG: &[u8] = b"account:Post";

/// The cryptographic public identity of a post's author.
///
/// Never supplied by the client; always derived from the authenticated
/// signer of the creating transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub [u8; 32]);

impl AuthorId {
    /// The raw identity bytes, as laid out on the wire.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", STANDARD.encode(self.0))
    }
}

/// A stored post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Authenticated author identity, set once at creation
    pub author: AuthorId,
    /// Creation time in unix seconds, stamped by the runtime clock
    pub timestamp: i64,
    /// Short subject line, at most 50 characters
    pub topic: String,
    /// Body text, at most 280 characters
    pub content: String,
}

impl Post {
    /// The record-type tag written at offset 0 of every post.
    ///
    /// Identical across all posts and distinct from every other record
    /// type's tag in the same store.
    pub fn discriminator() -> [u8; DISCRIMINATOR_LEN] {
        static DISCRIMINATOR: OnceLock<[u8; DISCRIMINATOR_LEN]> = OnceLock::new();
        *DISCRIMINATOR.get_or_init(|| {
            let digest = Sha256::digest(DISCRIMINATOR_TAG);
            let mut tag = [0u8; DISCRIMINATOR_LEN];
            tag.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
            tag
        })
    }

    /// Serialize to the canonical byte sequence.
    pub fn serialize(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(MAX_RECORD_LEN);
        writer.put_bytes(&Self::discriminator());
        writer.put_bytes(self.author.as_bytes());
        writer.put_i64(self.timestamp);
        writer.put_string(&self.topic);
        writer.put_string(&self.content);
        writer.into_bytes()
    }

    /// Decode a stored buffer back into a post.
    ///
    /// Verifies the discriminator first; a mismatch fails with
    /// `WrongDiscriminator` before any remaining bytes are interpreted.
    pub fn deserialize(buf: &[u8]) -> DecodeResult<Self> {
        let mut reader = ByteReader::new(buf);

        let found = reader.take_array::<DISCRIMINATOR_LEN>()?;
        let expected = Self::discriminator();
        if found != expected {
            return Err(DecodeError::WrongDiscriminator { expected, found });
        }

        let author = AuthorId(reader.take_array::<32>()?);
        let timestamp = reader.take_i64()?;
        let topic = reader.take_string()?;
        let content = reader.take_string()?;

        Ok(Self {
            author,
            timestamp,
            topic,
            content,
        })
    }
}
