//! Per-field limit validation for incoming posts
//!
//! Validation runs before any persistence attempt, is pure, and is
//! deterministic. Limits count Unicode scalar values, not raw UTF-8 bytes,
//! so multi-byte text is measured the way users count characters.
//!
//! Rules, checked in order, first failure wins:
//!
//! - topic longer than 50 characters is rejected
//! - content longer than 280 characters is rejected
//!
//! Nothing else is checked; empty topic and content are permitted.

mod errors;

pub use errors::{ValidationError, ValidationResult};

/// Maximum topic length, in Unicode scalar values.
pub const MAX_TOPIC_CHARS: usize = 50;

/// Maximum content length, in Unicode scalar values.
pub const MAX_CONTENT_CHARS: usize = 280;

/// Check a candidate post's fields against the ledger's limits.
pub fn validate_post(topic: &str, content: &str) -> ValidationResult<()> {
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return Err(ValidationError::TopicTooLong);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong);
    }
    Ok(())
}
