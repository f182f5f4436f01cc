//! # Domain Model: Widgets and Content Sanitization
//!
//! A [`Widget`] is a single free-text entry with a caller-assigned id and two
//! timestamps. The whole collection is persisted as one JSON array:
//!
//! ```text
//! [
//!   { "id": "a1", "content": "Buy milk", "createdAt": "2024-05-01T09:00:00.000Z",
//!     "updatedAt": "2024-05-01T09:03:12.250Z" }
//! ]
//! ```
//!
//! ## Shape Parsing
//!
//! Stored data is never trusted. Each array element goes through
//! [`Widget::from_value`], which either yields a fully typed `Widget` or a
//! [`ShapeError`] naming what was wrong. Nothing is coerced: a missing
//! timestamp or a timestamp that does not parse is a shape failure.
//!
//! ## Sanitization Pipeline
//!
//! [`sanitize_content`] runs on every write and on every read:
//!
//! 1. **Control characters**: U+0000–U+001F and U+007F are removed.
//! 2. **Whitespace**: runs of whitespace collapse to a single space.
//! 3. **Trim**: leading and trailing whitespace is dropped.
//! 4. **Cap**: the result is truncated to [`MAX_CONTENT_CHARS`] characters.
//!
//! Lengths are counted in Unicode scalar values, so an emoji counts as one.
//!
//! ## Edge Cases
//!
//! - **Newlines and tabs** are control characters and are removed in step 1,
//!   so `"a\nb"` becomes `"ab"`.
//! - **Empty input** stays empty. The store accepts empty widgets.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Result, StoreError};

/// Hard cap on persisted content, in characters.
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Version tag written into every backup record.
pub const BACKUP_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub content: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Widget {
    /// A fresh widget with both timestamps set to now.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Parse one stored element into a widget.
    pub fn from_value(value: &Value) -> std::result::Result<Widget, ShapeError> {
        let obj = value.as_object().ok_or(ShapeError::NotAnObject)?;

        let id = string_field(obj, "id")?;
        if is_blank_id(id) {
            return Err(ShapeError::EmptyId);
        }

        Ok(Widget {
            id: id.to_string(),
            content: string_field(obj, "content")?.to_string(),
            created_at: timestamp_field(obj, "createdAt")?,
            updated_at: timestamp_field(obj, "updatedAt")?,
        })
    }

    /// Check the invariants a widget must hold before it is written.
    pub fn check_shape(&self) -> std::result::Result<(), ShapeError> {
        if is_blank_id(&self.id) {
            return Err(ShapeError::EmptyId);
        }
        Ok(())
    }

    /// Copy of this widget with sanitized content.
    pub fn sanitized(&self) -> Widget {
        Widget {
            content: sanitize_content(&self.content),
            ..self.clone()
        }
    }
}

/// Ids that are empty or only whitespace cannot address a widget.
pub fn is_blank_id(id: &str) -> bool {
    id.trim().is_empty()
}

fn string_field<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<&'a str, ShapeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ShapeError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ShapeError::WrongType {
            field,
            expected: "string",
        }),
    }
}

fn timestamp_field(
    obj: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<DateTime<Utc>, ShapeError> {
    let raw = string_field(obj, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ShapeError::InvalidTimestamp {
            field,
            value: raw.to_string(),
        })
}

/// Why a stored element is not a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    NotAnObject,
    MissingField(&'static str),
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    EmptyId,
    InvalidTimestamp {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotAnObject => write!(f, "element is not an object"),
            ShapeError::MissingField(field) => write!(f, "missing field '{}'", field),
            ShapeError::WrongType { field, expected } => {
                write!(f, "field '{}' must be a {}", field, expected)
            }
            ShapeError::EmptyId => write!(f, "id cannot be empty or blank"),
            ShapeError::InvalidTimestamp { field, value } => {
                write!(f, "field '{}' is not a valid timestamp: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Side copy of the collection, written before every bulk save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    pub widgets: Vec<Widget>,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl BackupRecord {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            widgets,
            timestamp: Utc::now(),
            version: BACKUP_VERSION.to_string(),
        }
    }
}

/// Normalize widget content for persistence.
///
/// # Examples
/// ```
/// use widgetapp::model::sanitize_content;
///
/// assert_eq!(sanitize_content("  hello \t\n  world  "), "hello world");
/// assert_eq!(sanitize_content("bell\u{7}ring"), "bellring");
/// assert_eq!(sanitize_content("say \"hi\" 👋"), "say \"hi\" 👋");
/// ```
pub fn sanitize_content(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.chars().filter(|c| !c.is_ascii_control()) {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    match out.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => out[..cut].to_string(),
        None => out,
    }
}

/// Parse a whole collection supplied from outside (an import file, a
/// request body). Unlike the read path, nothing is dropped: the first bad
/// element rejects the collection.
pub fn parse_collection(value: &Value) -> Result<Vec<Widget>> {
    let items = value.as_array().ok_or_else(|| StoreError::InvalidType {
        expected: "array",
        found: json_type_name(value).to_string(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Widget::from_value(item).map_err(|reason| StoreError::InvalidWidget { index, reason })
        })
        .collect()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Render a timestamp the way it is persisted.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
