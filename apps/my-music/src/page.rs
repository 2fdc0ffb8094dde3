//! The "My Music" page

use std::sync::Arc;

use soundshelf_catalog_client::{Album, CatalogClient, CsrfTokenProvider};
use soundshelf_shared_config::BackendConfig;
use tracing::debug;

use crate::album_form::{AlbumForm, SubmitOutcome};
use crate::album_list::AlbumListLoader;

/// Album list plus creation form, as shown on the "My Music" page
///
/// The two halves hold independent state: a failed submission never touches
/// the loaded list, and the list is only refreshed after a successful one.
#[derive(Debug)]
pub struct MyMusicPage {
    pub albums: AlbumListLoader,
    pub form: AlbumForm,
    backend: BackendConfig,
}

impl MyMusicPage {
    /// Build the page with the client's own cookie-based CSRF provider
    pub fn new(client: CatalogClient) -> Self {
        let csrf = Arc::new(client.csrf_provider());
        Self::with_csrf_provider(client, csrf)
    }

    /// Build the page with an injected CSRF provider
    pub fn with_csrf_provider(client: CatalogClient, csrf: Arc<dyn CsrfTokenProvider>) -> Self {
        Self {
            backend: client.config().clone(),
            albums: AlbumListLoader::new(client.clone()),
            form: AlbumForm::new(client, csrf),
        }
    }

    /// Initial display: load the album list once
    pub async fn open(&mut self) {
        self.albums.load().await;
    }

    /// Submit the form, then reload the list if the album was created
    pub async fn create_album(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit().await;
        if outcome.is_success() {
            debug!("Reloading album list after creation");
            self.albums.load().await;
        }
        outcome
    }

    /// Public cover image URL for a listed album
    pub fn cover_url(&self, album: &Album) -> Option<String> {
        album
            .cover
            .as_deref()
            .map(|cover| self.backend.cover_url(cover))
    }
}
