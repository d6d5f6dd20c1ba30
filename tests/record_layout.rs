//! Record Layout Invariant Tests
//!
//! - The discriminator is identical across records and checked before any
//!   other byte is interpreted
//! - Author and timestamp offsets are constant regardless of the
//!   variable-length fields
//! - Content offsets depend on the stored topic length and are computed
//!   per buffer
//! - serialize/deserialize round-trips every admissible post

use chirpdb::codec::DecodeError;
use chirpdb::record::{
    content_len_offset, content_offset, AuthorId, Post, AUTHOR_OFFSET, STRING_LEN_PREFIX,
    TIMESTAMP_OFFSET, TOPIC_OFFSET,
};
use proptest::prelude::*;

// =============================================================================
// Test Utilities
// =============================================================================

fn post(topic: &str, content: &str) -> Post {
    Post {
        author: AuthorId(rand::random()),
        timestamp: 1_700_000_000,
        topic: topic.to_string(),
        content: content.to_string(),
    }
}

// =============================================================================
// Fixed Offsets
// =============================================================================

/// Author and timestamp bytes sit at the same offset in two records with
/// different topic/content lengths.
#[test]
fn test_fixed_offsets_independent_of_variable_fields() {
    let short = post("a", "b").serialize();
    let long = post(&"x".repeat(50), &"y".repeat(280)).serialize();

    for buf in [&short, &long] {
        assert_eq!(
            buf[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 8],
            1_700_000_000i64.to_le_bytes()
        );
    }

    // The author field occupies the same range in both.
    let short_author = &short[AUTHOR_OFFSET..AUTHOR_OFFSET + 32];
    assert_eq!(short_author.len(), 32);
    let long_author = &long[AUTHOR_OFFSET..AUTHOR_OFFSET + 32];
    assert_eq!(long_author.len(), 32);
}

/// The topic length prefix is constant; the content offset moves with the
/// topic and must be recomputed per buffer.
#[test]
fn test_content_offset_is_computed_not_constant() {
    let a = post("ab", "same").serialize();
    let b = post("abcdef", "same").serialize();

    assert_eq!(content_len_offset(&a).unwrap(), TOPIC_OFFSET + 2);
    assert_eq!(content_len_offset(&b).unwrap(), TOPIC_OFFSET + 6);
    assert_ne!(
        content_offset(&a).unwrap(),
        content_offset(&b).unwrap()
    );

    let off = content_offset(&b).unwrap();
    assert_eq!(&b[off..off + 4], b"same");
    assert_eq!(off, content_len_offset(&b).unwrap() + STRING_LEN_PREFIX);
}

// =============================================================================
// Discriminator Defense
// =============================================================================

/// A buffer carrying a different record type's tag is refused before the
/// body is interpreted.
#[test]
fn test_foreign_record_type_refused() {
    let mut buf = post("Love", "I love you so much").serialize();
    // Another account kind with a different leading tag.
    buf[..8].copy_from_slice(&[0xAA; 8]);

    match Post::deserialize(&buf) {
        Err(DecodeError::WrongDiscriminator { expected, found }) => {
            assert_eq!(expected, Post::discriminator());
            assert_eq!(found, [0xAA; 8]);
        }
        other => panic!("expected WrongDiscriminator, got {:?}", other),
    }
}

/// A buffer shorter than the discriminator is truncated, not misclassified.
#[test]
fn test_tiny_buffer_is_truncated_not_wrong_type() {
    let err = Post::deserialize(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedBuffer { .. }));
}

/// A length prefix pointing past the end of the buffer is corrupt.
#[test]
fn test_overlong_length_prefix_is_corrupt() {
    let mut buf = post("Love", "hi").serialize();
    let prefix = TOPIC_OFFSET - STRING_LEN_PREFIX;
    buf[prefix..prefix + 4].copy_from_slice(&10_000u32.to_le_bytes());

    let err = Post::deserialize(&buf).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::CorruptLength {
            declared: 10_000,
            ..
        }
    ));
}

// =============================================================================
// Round-Trip Law
// =============================================================================

proptest! {
    /// Every admissible post survives serialize → deserialize unchanged.
    #[test]
    fn prop_roundtrip_for_all_admissible_posts(
        author in any::<[u8; 32]>(),
        timestamp in any::<i64>(),
        topic_chars in proptest::collection::vec(any::<char>(), 0..=50),
        content_chars in proptest::collection::vec(any::<char>(), 0..=280),
    ) {
        let original = Post {
            author: AuthorId(author),
            timestamp,
            topic: topic_chars.into_iter().collect(),
            content: content_chars.into_iter().collect(),
        };
        prop_assert!(chirpdb::validate::validate_post(&original.topic, &original.content).is_ok());

        let decoded = Post::deserialize(&original.serialize()).unwrap();
        prop_assert_eq!(decoded, original);
    }
}
