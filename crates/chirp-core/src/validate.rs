//! Field validation for posts about to be submitted.
//!
//! These checks mirror the ledger program's own enforcement exactly, so
//! a doomed submission is rejected before any network attempt. Bounds
//! are inclusive: 50-character topics and 280-character contents pass.
//! Lengths are counted in characters, not bytes, matching the program.

use crate::error::ValidateError;
use crate::layout::{MAX_CONTENT_CHARS, MAX_TOPIC_CHARS};

/// Validate a topic string. Empty topics are allowed.
pub fn validate_topic(topic: &str) -> Result<(), ValidateError> {
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return Err(ValidateError::TopicTooLong);
    }
    Ok(())
}

/// Validate a content string. Content must be 1..=280 characters.
pub fn validate_content(content: &str) -> Result<(), ValidateError> {
    if content.is_empty() {
        return Err(ValidateError::ContentEmpty);
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(ValidateError::ContentTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_boundary() {
        assert!(validate_topic("").is_ok());
        assert!(validate_topic("solana").is_ok());
        assert!(validate_topic(&"x".repeat(50)).is_ok());

        let result = validate_topic(&"x".repeat(51));
        assert_eq!(result, Err(ValidateError::TopicTooLong));
    }

    #[test]
    fn test_content_boundary() {
        assert!(validate_content("g").is_ok());
        assert!(validate_content(&"x".repeat(280)).is_ok());

        assert_eq!(validate_content(""), Err(ValidateError::ContentEmpty));
        assert_eq!(
            validate_content(&"x".repeat(281)),
            Err(ValidateError::ContentTooLong)
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 50 snowmen are 150 bytes but exactly 50 characters
        let topic = "\u{2603}".repeat(50);
        assert_eq!(topic.len(), 150);
        assert!(validate_topic(&topic).is_ok());

        let content = "\u{2603}".repeat(280);
        assert!(validate_content(&content).is_ok());
        assert_eq!(
            validate_content(&"\u{2603}".repeat(281)),
            Err(ValidateError::ContentTooLong)
        );
    }

    #[test]
    fn test_error_messages_match_program() {
        assert_eq!(
            ValidateError::TopicTooLong.to_string(),
            "The provided topic should be 50 characters long maximum."
        );
        assert_eq!(
            ValidateError::ContentTooLong.to_string(),
            "The provided content should be 280 characters long maximum."
        );
    }
}
