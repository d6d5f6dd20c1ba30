//! Decode error types for the record wire format
//!
//! These are surfaced only when stored bytes do not conform to the expected
//! layout. They indicate either a store-addressing bug (reading the wrong
//! account) or data corruption, and are fatal for the record in question.

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding a stored record buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the next field requires
    #[error("truncated buffer: needed {needed} bytes at offset {offset}, only {remaining} remain")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A string length prefix declares more bytes than the buffer holds
    #[error("corrupt length prefix at offset {offset}: declares {declared} bytes, only {remaining} remain")]
    CorruptLength {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    /// String field bytes are not valid UTF-8
    #[error("invalid UTF-8 in string field at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Leading type tag does not identify a post record
    #[error("wrong discriminator: expected {expected:02x?}, found {found:02x?}")]
    WrongDiscriminator { expected: [u8; 8], found: [u8; 8] },
}
