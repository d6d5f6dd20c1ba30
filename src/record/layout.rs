//! Byte offsets within a serialized post record
//!
//! ```text
//! +------------------+--------+-----------------------------+
//! | Discriminator    | 8 B    | offset 0   (constant)       |
//! | Author           | 32 B   | offset 8   (constant)       |
//! | Timestamp        | i64 LE | offset 40  (constant)       |
//! | Topic length     | u32 LE | offset 48  (constant)       |
//! | Topic bytes      | var    | offset 52  (constant)       |
//! | Content length   | u32 LE | computed from topic length  |
//! | Content bytes    | var    | computed from topic length  |
//! +------------------+--------+-----------------------------+
//! ```
//!
//! The asymmetry is deliberate: author and topic sit at constant offsets so
//! memcmp filters on them are cheap and universal, while content does not
//! and cannot be filtered by raw offset.

use crate::codec::{ByteReader, DecodeResult};
use crate::validate::{MAX_CONTENT_CHARS, MAX_TOPIC_CHARS};

/// Width of the leading record-type tag.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Width of an author identity.
pub const AUTHOR_LEN: usize = 32;

/// Width of the creation timestamp.
pub const TIMESTAMP_LEN: usize = 8;

/// Width of the length prefix on each string field.
pub const STRING_LEN_PREFIX: usize = 4;

/// Byte offset of the author identity. Constant across all records.
pub const AUTHOR_OFFSET: usize = DISCRIMINATOR_LEN;

/// Byte offset of the timestamp. Constant across all records.
pub const TIMESTAMP_OFFSET: usize = AUTHOR_OFFSET + AUTHOR_LEN;

/// Byte offset of the topic length prefix. Constant across all records.
pub const TOPIC_LEN_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;

/// Byte offset of the topic bytes. Constant across all records.
pub const TOPIC_OFFSET: usize = TOPIC_LEN_OFFSET + STRING_LEN_PREFIX;

/// Upper bound on a serialized record, assuming worst-case 4-byte UTF-8
/// for every character. Used as an allocation hint by stores.
pub const MAX_RECORD_LEN: usize = TOPIC_OFFSET
    + MAX_TOPIC_CHARS * 4
    + STRING_LEN_PREFIX
    + MAX_CONTENT_CHARS * 4;

/// Byte offset of the content length prefix in `buf`.
///
/// Depends on the stored topic length, so it must be read from the concrete
/// buffer. Fails if the buffer is truncated before the topic length prefix
/// or the prefix declares more topic bytes than the buffer holds.
pub fn content_len_offset(buf: &[u8]) -> DecodeResult<usize> {
    let mut reader = ByteReader::new(buf);
    reader.take(TOPIC_LEN_OFFSET)?;
    let topic_len = reader.take_u32()? as usize;
    if topic_len > reader.remaining() {
        return Err(crate::codec::DecodeError::CorruptLength {
            offset: TOPIC_LEN_OFFSET,
            declared: topic_len,
            remaining: reader.remaining(),
        });
    }
    Ok(TOPIC_OFFSET + topic_len)
}

/// Byte offset of the content bytes in `buf`. Computed, see
/// [`content_len_offset`].
pub fn content_offset(buf: &[u8]) -> DecodeResult<usize> {
    Ok(content_len_offset(buf)? + STRING_LEN_PREFIX)
}
