//! Album creation form state and submission

use std::fmt;
use std::sync::Arc;

use soundshelf_catalog_client::{
    CatalogClient, CatalogError, CoverFile, CreateAlbumRequest, CsrfTokenProvider, FieldError,
};
use tracing::{debug, info, instrument, warn};

use crate::features::FeatureEntries;
use crate::field_errors::{FieldErrors, StatusMessage, GENERIC_FAILURE_MESSAGE};
use crate::loading::LoadingFlag;
use crate::release_date::parse_release_date;

/// Values currently entered in the album form
#[derive(Debug, Clone, Default)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub cover: Option<CoverFile>,
    /// Raw text of the date input
    pub release_date: String,
    pub genre: String,
    pub features: FeatureEntries,
}

impl AlbumDraft {
    /// Derive the upload payload from the entered values
    pub fn to_request(&self) -> CreateAlbumRequest {
        CreateAlbumRequest {
            title: self.title.clone(),
            artist: self.artist.clone(),
            cover: self.cover.clone(),
            genre: self.genre.clone(),
            release_date: parse_release_date(&self.release_date),
            features: self.features.submitted_values(),
        }
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the album
    Success,
    /// The backend rejected named fields
    FieldErrors(Vec<FieldError>),
    /// Anything else; carries the message shown to the user
    GenericError(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}

/// Album creation form
///
/// Field errors and the status message survive across attempts: a new
/// response only overwrites what it mentions, and success clears nothing.
pub struct AlbumForm {
    client: CatalogClient,
    csrf: Arc<dyn CsrfTokenProvider>,
    pub draft: AlbumDraft,
    field_errors: FieldErrors,
    status_message: Option<StatusMessage>,
    request_loading: LoadingFlag,
}

impl fmt::Debug for AlbumForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlbumForm")
            .field("draft", &self.draft)
            .field("field_errors", &self.field_errors)
            .field("status_message", &self.status_message)
            .field("request_loading", &self.request_loading.is_loading())
            .finish()
    }
}

impl AlbumForm {
    pub fn new(client: CatalogClient, csrf: Arc<dyn CsrfTokenProvider>) -> Self {
        Self {
            client,
            csrf,
            draft: AlbumDraft::default(),
            field_errors: FieldErrors::new(),
            status_message: None,
            request_loading: LoadingFlag::new(),
        }
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    /// Handle for the submit button's loading indicator
    pub fn request_loading(&self) -> LoadingFlag {
        self.request_loading.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.request_loading.is_loading()
    }

    /// Submit the current draft
    ///
    /// The CSRF token is refreshed first; a failed refresh is logged and the
    /// upload is attempted anyway. The loading flag stays raised until the
    /// upload response has been handled.
    #[instrument(skip(self), fields(title = %self.draft.title))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let _guard = self.request_loading.acquire();

        let request = self.draft.to_request();
        if let Some(cover) = &request.cover {
            if !cover.matches_accept_filter() {
                debug!(content_type = %cover.content_type, "Cover is outside the picker filter");
            }
        }

        if let Err(e) = self.csrf.refresh_token().await {
            warn!(error = %e, "CSRF token refresh failed, submitting anyway");
        }

        match self.client.create_album(request).await {
            Ok(()) => {
                info!("Album created");
                SubmitOutcome::Success
            }
            Err(CatalogError::Validation(errors)) => {
                let applied = self.field_errors.apply(&errors);
                debug!(applied, received = errors.len(), "Mapped field errors");
                SubmitOutcome::FieldErrors(errors)
            }
            Err(e) => {
                warn!(error = %e, "Album creation failed");
                self.status_message = Some(StatusMessage::generic_failure());
                SubmitOutcome::GenericError(GENERIC_FAILURE_MESSAGE.to_string())
            }
        }
    }
}
