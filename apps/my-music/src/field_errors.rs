//! Per-field validation messages for the album form

use std::fmt;
use std::str::FromStr;

use soundshelf_catalog_client::FieldError;
use tracing::warn;

/// Message shown when a failure carries no field errors
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later.";

/// Inputs of the album form that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Artist,
    Cover,
    ReleaseDate,
    Genre,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Artist,
        FormField::Cover,
        FormField::ReleaseDate,
        FormField::Genre,
    ];

    /// Name used on the wire and in the multipart body
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Artist => "artist",
            FormField::Cover => "cover",
            FormField::ReleaseDate => "release_date",
            FormField::Genre => "genre",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown form field '{}'", s))
    }
}

/// Current validation message per form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    title: Option<String>,
    artist: Option<String>,
    cover: Option<String>,
    release_date: Option<String>,
    genre: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        *self.slot_mut(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.slot(*field).is_none())
    }

    /// Fields that currently carry a message, in form order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    /// Overwrite the message of every field named in `errors`
    ///
    /// Fields not mentioned keep their previous message. Entries naming an
    /// unknown field are skipped. Returns how many entries were applied.
    pub fn apply(&mut self, errors: &[FieldError]) -> usize {
        let mut applied = 0;
        for error in errors {
            match error.field.parse::<FormField>() {
                Ok(field) => {
                    self.set(field, error.message.clone());
                    applied += 1;
                }
                Err(reason) => {
                    warn!(%reason, error_message = %error.message, "Ignoring field error")
                }
            }
        }
        applied
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::Title => &self.title,
            FormField::Artist => &self.artist,
            FormField::Cover => &self.cover,
            FormField::ReleaseDate => &self.release_date,
            FormField::Genre => &self.genre,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
            FormField::Cover => &mut self.cover,
            FormField::ReleaseDate => &mut self.release_date,
            FormField::Genre => &mut self.genre,
        }
    }
}

/// Severity of a status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
}

/// Form-level message not attributed to any field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn generic_failure() -> Self {
        Self::error(GENERIC_FAILURE_MESSAGE)
    }
}
