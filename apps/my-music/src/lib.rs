//! Headless view-model for the SoundShelf "My Music" page
//!
//! A UI shell renders [`MyMusicPage`] and forwards user actions to it:
//! - [`AlbumListLoader`] fetches the user's albums and keeps the last good copy
//! - [`AlbumForm`] holds the draft, uploads it and maps validation errors
//!   onto [`FieldErrors`]
//!
//! # Example
//!
//! ```rust,no_run
//! use soundshelf_catalog_client::{CatalogClient, CoverFile};
//! use soundshelf_my_music::{MyMusicPage, SubmitOutcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = MyMusicPage::new(CatalogClient::from_env()?);
//! page.open().await;
//!
//! page.form.draft.title = "Blue Train".to_string();
//! page.form.draft.artist = "John Coltrane".to_string();
//! page.form.draft.cover = Some(CoverFile::from_path("cover.jpg").await?);
//! page.form.draft.release_date = "1958-01-01".to_string();
//!
//! match page.create_album().await {
//!     SubmitOutcome::Success => println!("{} albums", page.albums.albums().len()),
//!     SubmitOutcome::FieldErrors(errors) => println!("{} invalid fields", errors.len()),
//!     SubmitOutcome::GenericError(message) => println!("{}", message),
//! }
//! # Ok(())
//! # }
//! ```

mod album_form;
mod album_list;
mod features;
mod field_errors;
mod loading;
mod page;
mod release_date;
pub mod telemetry;

pub use album_form::{AlbumDraft, AlbumForm, SubmitOutcome};
pub use album_list::AlbumListLoader;
pub use features::FeatureEntries;
pub use field_errors::{FieldErrors, FormField, StatusKind, StatusMessage, GENERIC_FAILURE_MESSAGE};
pub use loading::{LoadingFlag, LoadingGuard};
pub use page::MyMusicPage;
pub use release_date::parse_release_date;
