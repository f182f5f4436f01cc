//! Content length validation for widget editors.
//!
//! This is the check a UI runs while the user types. It is separate from
//! [`crate::model::sanitize_content`]: validation counts the raw text and
//! reports problems, the sanitizer silently normalizes and truncates.
//!
//! - Limit: [`CONTENT_LIMIT`] characters (Unicode scalar values)
//! - Warning threshold: [`WARNING_THRESHOLD`] characters

use serde::Serialize;
use std::fmt;

pub const CONTENT_LIMIT: usize = 5000;
pub const WARNING_THRESHOLD: usize = 4500;

/// Result of validating a piece of widget text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentValidation {
    pub is_valid: bool,
    pub errors: Vec<ContentIssue>,
    pub warnings: Vec<ContentIssue>,
    pub character_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentIssue {
    /// Text is longer than the limit and will be truncated on save
    TooLong { count: usize, limit: usize },
    /// Text is close to the limit
    NearLimit { remaining: usize },
}

/// Validates widget text against the length limit.
///
/// # Examples
/// ```
/// use widgetapp::validation::validate_content;
///
/// let ok = validate_content("hello");
/// assert!(ok.is_valid);
/// assert_eq!(ok.character_count, 5);
///
/// let long = validate_content(&"a".repeat(5001));
/// assert!(!long.is_valid);
/// ```
pub fn validate_content(text: &str) -> ContentValidation {
    let character_count = text.chars().count();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if character_count > CONTENT_LIMIT {
        errors.push(ContentIssue::TooLong {
            count: character_count,
            limit: CONTENT_LIMIT,
        });
    } else if character_count >= WARNING_THRESHOLD {
        warnings.push(ContentIssue::NearLimit {
            remaining: CONTENT_LIMIT - character_count,
        });
    }

    ContentValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        character_count,
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::TooLong { count, limit } => write!(
                f,
                "content is {} characters, over the {} character limit",
                count, limit
            ),
            ContentIssue::NearLimit { remaining } => {
                write!(f, "{} characters remaining", remaining)
            }
        }
    }
}
