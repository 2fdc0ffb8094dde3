//! Shared test utilities for SoundShelf workspace
//!
//! This crate provides a mock catalog backend for testing the client and the
//! "My Music" view-model without network dependencies.
//!
//! # Example
//!
//! ```rust,ignore
//! use soundshelf_test_utils::{AlbumFixture, MockCatalogServer};
//!
//! #[tokio::test]
//! async fn test_with_mock_backend() {
//!     let server = MockCatalogServer::start().await;
//!     server.mock_csrf_cookie("token").await;
//!     server.mock_my_albums(vec![AlbumFixture::new(1, "Blue Train", "John Coltrane")]).await;
//!
//!     // Point BackendConfig::with_url at server.url()
//! }
//! ```

mod catalog;

pub use catalog::{AlbumFixture, MockCatalogServer};
