//! Common test utilities for "My Music" integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use soundshelf_catalog_client::{
    CatalogClient, CatalogError, CatalogResult, CoverFile, CsrfTokenProvider,
};
use soundshelf_my_music::{AlbumDraft, MyMusicPage};
use soundshelf_shared_config::BackendConfig;
use soundshelf_test_utils::MockCatalogServer;

/// CSRF provider that counts refreshes and optionally fails them
#[derive(Default)]
pub struct CountingCsrf {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingCsrf {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CsrfTokenProvider for CountingCsrf {
    async fn refresh_token(&self) -> CatalogResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::Csrf("auth service offline".to_string()));
        }
        Ok(())
    }
}

pub fn client_for(server: &MockCatalogServer) -> CatalogClient {
    let config = BackendConfig::with_url(&server.url()).unwrap();
    CatalogClient::new(&config).unwrap()
}

/// Page against `server` with a counting CSRF provider
pub fn page_with_counting_csrf(server: &MockCatalogServer) -> (MyMusicPage, Arc<CountingCsrf>) {
    let csrf = Arc::new(CountingCsrf::default());
    let page = MyMusicPage::with_csrf_provider(client_for(server), csrf.clone());
    (page, csrf)
}

/// A draft with title, artist, genre and a PNG cover
pub fn valid_draft() -> AlbumDraft {
    AlbumDraft {
        title: "A Love Supreme".to_string(),
        artist: "John Coltrane".to_string(),
        cover: Some(CoverFile::new("a-love-supreme.png", b"png".to_vec())),
        genre: "1".to_string(),
        ..Default::default()
    }
}
