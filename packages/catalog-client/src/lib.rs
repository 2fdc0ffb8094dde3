//! Catalog backend client for SoundShelf
//!
//! This crate talks to the SoundShelf catalog backend on behalf of the
//! "My Music" page:
//! - listing the current user's albums (`GET /my-albums`)
//! - uploading a new album with its cover (`POST /create-album`)
//! - refreshing the `XSRF-TOKEN` cookie required by write requests
//!
//! # Example
//!
//! ```rust,no_run
//! use soundshelf_catalog_client::{
//!     CatalogClient, CoverFile, CreateAlbumRequest, CsrfTokenProvider,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::from_env()?;
//!
//! for album in client.fetch_my_albums().await? {
//!     println!("{} - {}", album.artist, album.title);
//! }
//!
//! client.csrf_provider().refresh_token().await?;
//! client
//!     .create_album(CreateAlbumRequest {
//!         title: "Kind of Blue".to_string(),
//!         artist: "Miles Davis".to_string(),
//!         cover: Some(CoverFile::from_path("cover.jpg").await?),
//!         genre: "1".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SOUNDSHELF_API_URL`: backend base URL (default `http://localhost:8000`)

mod client;
mod csrf;
mod error;
mod models;
mod upload;

pub use client::{CatalogClient, CREATE_ALBUM_PATH, MY_ALBUMS_PATH};
pub use csrf::{CookieCsrfProvider, CsrfTokenProvider, XSRF_COOKIE, XSRF_HEADER};
pub use error::{CatalogError, CatalogResult};
pub use models::{Album, FieldError, GenreRef};
pub use upload::{CoverFile, CreateAlbumRequest, COVER_ACCEPT};
