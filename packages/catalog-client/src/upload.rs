//! Album upload payload

use std::fmt;
use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::error::CatalogResult;

/// Content types offered by the cover picker. Advisory only.
pub const COVER_ACCEPT: &[&str] = &["image/png", "image/jpeg"];

/// A cover image selected for upload
#[derive(Clone, PartialEq, Eq)]
pub struct CoverFile {
    /// File name sent with the multipart part
    pub file_name: String,
    /// MIME type guessed from the file extension
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl fmt::Debug for CoverFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl CoverFile {
    /// Wrap in-memory bytes, guessing the content type from `file_name`
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a cover image from disk
    pub async fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cover".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Whether the file matches the picker's `image/png, image/jpeg` filter
    pub fn matches_accept_filter(&self) -> bool {
        COVER_ACCEPT.contains(&self.content_type.as_str())
    }
}

/// Everything sent to `POST /create-album`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub artist: String,
    /// Omitted from the body when `None`; the backend reports it as a field error
    pub cover: Option<CoverFile>,
    pub genre: String,
    /// Epoch milliseconds; omitted when `None`
    pub release_date: Option<i64>,
    /// Feature credits; omitted when empty
    pub features: Vec<String>,
}

impl CreateAlbumRequest {
    /// Text parts of the multipart body, in the order they are appended
    pub fn text_fields(&self) -> CatalogResult<Vec<(&'static str, String)>> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("artist", self.artist.clone()),
            ("genre", self.genre.clone()),
        ];
        if let Some(release_date) = self.release_date {
            fields.push(("release_date", release_date.to_string()));
        }
        if !self.features.is_empty() {
            fields.push(("features", serde_json::to_string(&self.features)?));
        }
        Ok(fields)
    }

    pub(crate) fn into_form(self) -> CatalogResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields()? {
            form = form.text(name, value);
        }
        if let Some(cover) = self.cover {
            let part = Part::bytes(cover.bytes)
                .file_name(cover.file_name)
                .mime_str(&cover.content_type)?;
            form = form.part("cover", part);
        }
        Ok(form)
    }
}
