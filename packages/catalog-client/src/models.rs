//! Catalog API models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An album owned by the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Backend identifier
    pub id: i64,
    /// Album title
    pub title: String,
    /// Credited artist
    pub artist: String,
    /// Stored cover file name (relative to the covers directory)
    #[serde(default)]
    pub cover: Option<String>,
    /// Release date as epoch milliseconds
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub release_date: Option<i64>,
    /// Genre reference in whichever shape the backend sent it
    #[serde(default)]
    pub genre: Option<GenreRef>,
}

impl Album {
    /// Release date rendered for display, e.g. `May 1, 2023`
    pub fn pretty_release_date(&self) -> Option<String> {
        let millis = self.release_date?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|date| date.format("%B %-d, %Y").to_string())
    }
}

/// Genre as returned alongside an album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreRef {
    Id(i64),
    Name(String),
    Record {
        id: i64,
        #[serde(default)]
        name: Option<String>,
    },
}

impl GenreRef {
    /// Human-readable label, falling back to the id
    pub fn label(&self) -> String {
        match self {
            GenreRef::Id(id) => id.to_string(),
            GenreRef::Name(name) => name.clone(),
            GenreRef::Record { name: Some(name), .. } => name.clone(),
            GenreRef::Record { id, name: None } => id.to_string(),
        }
    }
}

/// A validation failure attributed to one named form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field (e.g. `title`, `release_date`)
    pub field: String,
    /// Message to show next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub errors: Option<RawErrors>,
}

/// The two error collection shapes the backend produces
///
/// Entries are kept as raw values so one unreadable entry does not discard
/// its siblings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawErrors {
    /// `[{"field": "title", "errorMessage": "..."}]`
    List(Vec<Value>),
    /// `{"title": ["...", "..."]}` or `{"title": "..."}`
    Map(BTreeMap<String, Value>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFieldError {
    pub field: String,
    #[serde(rename = "errorMessage", alias = "message")]
    pub error_message: String,
}

impl RawErrors {
    pub(crate) fn into_field_errors(self) -> Vec<FieldError> {
        match self {
            RawErrors::List(entries) => entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value::<RawFieldError>(entry).ok())
                .map(|raw| FieldError::new(raw.field, raw.error_message))
                .collect(),
            RawErrors::Map(map) => map
                .into_iter()
                .filter_map(|(field, messages)| {
                    first_message(messages).map(|message| FieldError::new(field, message))
                })
                .collect(),
        }
    }
}

fn first_message(messages: Value) -> Option<String> {
    match messages {
        Value::String(message) => Some(message),
        Value::Array(messages) => messages.into_iter().find_map(|message| match message {
            Value::String(message) => Some(message),
            _ => None,
        }),
        _ => None,
    }
}

impl ErrorResponse {
    /// Parse an error body into field errors; unparseable bodies yield none
    pub(crate) fn field_errors_from_body(body: &str) -> Vec<FieldError> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.errors)
            .map(RawErrors::into_field_errors)
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawTimestamp::Int(millis)) => Some(millis),
        Some(RawTimestamp::Float(millis)) if millis.is_finite() => Some(millis as i64),
        Some(RawTimestamp::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
