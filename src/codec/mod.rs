//! Field codec for the post record wire format
//!
//! All multi-byte integers are little-endian. Strings are length-prefixed:
//! a u32 LE byte count followed by that many bytes of UTF-8.
//!
//! # Design Principles
//!
//! - Cursor-based: every read advances an explicit position
//! - No partial reads: a field decodes fully or fails
//! - Decode failures carry the offset at which they occurred

mod cursor;
mod errors;

pub use cursor::{ByteReader, ByteWriter};
pub use errors::{DecodeError, DecodeResult};
