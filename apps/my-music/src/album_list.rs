//! The user's album list

use soundshelf_catalog_client::{Album, CatalogClient};
use tracing::{debug, warn};

use crate::loading::LoadingFlag;

/// Loads and holds the current user's albums
///
/// Failures are logged and leave the previously loaded list untouched.
#[derive(Debug)]
pub struct AlbumListLoader {
    client: CatalogClient,
    albums: Vec<Album>,
    loading: LoadingFlag,
}

impl AlbumListLoader {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            albums: Vec::new(),
            loading: LoadingFlag::new(),
        }
    }

    /// Albums in the order the backend returned them
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Handle for the list's loading indicator
    pub fn loading(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Fetch the album list, replacing the held copy on success
    ///
    /// Returns whether the list was replaced. No retry is attempted.
    pub async fn load(&mut self) -> bool {
        let _guard = self.loading.acquire();

        match self.client.fetch_my_albums().await {
            Ok(albums) => {
                debug!(album_count = albums.len(), "Album list refreshed");
                self.albums = albums;
                true
            }
            Err(e) => {
                warn!(error = %e, kept = self.albums.len(), "Failed to load my albums");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use soundshelf_shared_config::BackendConfig;
    use soundshelf_test_utils::{AlbumFixture, MockCatalogServer};
    use tracing_test::traced_test;

    fn loader_for(server: &MockCatalogServer) -> AlbumListLoader {
        let config = BackendConfig::with_url(&server.url()).unwrap();
        AlbumListLoader::new(CatalogClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_load_replaces_albums() {
        let server = MockCatalogServer::start().await;
        server
            .mock_my_albums(vec![AlbumFixture::new(1, "Blue Train", "John Coltrane")])
            .await;

        let mut loader = loader_for(&server);
        assert!(loader.load().await);
        assert_eq!(loader.albums().len(), 1);
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_raised_while_fetching() {
        let server = MockCatalogServer::start().await;
        server
            .mock_my_albums_delayed(
                vec![AlbumFixture::new(1, "Blue Train", "John Coltrane")],
                Duration::from_millis(300),
            )
            .await;

        let mut loader = loader_for(&server);
        let loading = loader.loading();
        assert!(!loading.is_loading());

        let observer = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            loading.is_loading()
        };
        let (replaced, loading_mid_flight) = tokio::join!(loader.load(), observer);

        assert!(replaced);
        assert!(loading_mid_flight);
        assert!(!loading.is_loading());
        assert_eq!(loader.albums().len(), 1);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_load_is_logged_and_keeps_stale_list() {
        let server = MockCatalogServer::start().await;
        server
            .mock_my_albums_then_failure(
                vec![AlbumFixture::new(1, "Blue Train", "John Coltrane")],
                500,
            )
            .await;

        let mut loader = loader_for(&server);
        assert!(loader.load().await);
        assert!(!loader.load().await);

        assert_eq!(loader.albums()[0].title, "Blue Train");
        assert!(!loader.is_loading());
        assert!(logs_contain("Failed to load my albums"));
    }

    #[tokio::test]
    async fn test_first_load_failure_leaves_list_empty() {
        let server = MockCatalogServer::start().await;
        server.mock_my_albums_failure(503).await;

        let mut loader = loader_for(&server);
        assert!(!loader.load().await);
        assert!(loader.albums().is_empty());
    }
}
