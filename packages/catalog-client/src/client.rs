//! Catalog backend client implementation

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use soundshelf_shared_config::BackendConfig;
use tracing::{debug, instrument, warn};

use crate::csrf::{xsrf_token, CookieCsrfProvider, XSRF_HEADER};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Album, ErrorResponse};
use crate::upload::CreateAlbumRequest;

/// Path of the current user's album list
pub const MY_ALBUMS_PATH: &str = "my-albums";

/// Path of the album creation endpoint
pub const CREATE_ALBUM_PATH: &str = "create-album";

/// Catalog backend client
///
/// Cloning is cheap; clones share the connection pool and the cookie jar
/// that holds the session and `XSRF-TOKEN` cookies.
#[derive(Clone)]
pub struct CatalogClient {
    http_client: Client,
    jar: Arc<Jar>,
    config: BackendConfig,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("api_url", &self.config.api_url.as_str())
            .field("cookies", &"[REDACTED]")
            .finish()
    }
}

impl CatalogClient {
    /// Create a new catalog client for the given backend
    pub fn new(config: &BackendConfig) -> CatalogResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let jar = Arc::new(Jar::default());
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("SoundShelf/1.0")
            .default_headers(headers)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        Ok(Self {
            http_client,
            jar,
            config: config.clone(),
        })
    }

    /// Create a catalog client from `SOUNDSHELF_*` environment variables
    pub fn from_env() -> CatalogResult<Self> {
        let config = BackendConfig::from_env()?;
        Self::new(&config)
    }

    /// Backend configuration this client talks to
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// CSRF provider writing into this client's cookie jar
    pub fn csrf_provider(&self) -> CookieCsrfProvider {
        CookieCsrfProvider::new(self.http_client.clone(), self.config.csrf_url())
    }

    /// Fetch the albums owned by the authenticated user
    ///
    /// # Errors
    /// - `CatalogError::Status` - any status other than 200
    /// - `CatalogError::Parse` - the body is not a list of albums
    /// - `CatalogError::Http` / `CatalogError::Timeout` - transport failure
    #[instrument(skip(self))]
    pub async fn fetch_my_albums(&self) -> CatalogResult<Vec<Album>> {
        let url = self.config.endpoint(MY_ALBUMS_PATH);
        debug!(url = %url, "Fetching my albums");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::from_send)?;

        let status = response.status();
        let body = response.text().await.map_err(CatalogError::from_send)?;
        if status != StatusCode::OK {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let albums: Vec<Album> = serde_json::from_str(&body)?;
        debug!(album_count = albums.len(), "Fetched my albums");
        Ok(albums)
    }

    /// Upload a new album as multipart form data
    ///
    /// The current `XSRF-TOKEN` cookie, if any, is echoed in the
    /// `X-XSRF-TOKEN` header. Refreshing it is the caller's job.
    ///
    /// # Errors
    /// - `CatalogError::Validation` - non-2xx with a non-empty `errors` collection
    /// - `CatalogError::Status` - non-2xx without usable field errors
    /// - `CatalogError::Http` / `CatalogError::Timeout` - transport failure
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_album(&self, request: CreateAlbumRequest) -> CatalogResult<()> {
        let url = self.config.endpoint(CREATE_ALBUM_PATH);
        let form = request.into_form()?;

        let mut builder = self.http_client.post(&url).multipart(form);
        match xsrf_token(&self.jar, &self.config.api_url) {
            Some(token) => builder = builder.header(XSRF_HEADER, token),
            None => warn!("No XSRF-TOKEN cookie present, sending create-album without it"),
        }

        let response = builder.send().await.map_err(CatalogError::from_send)?;
        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Album created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let errors = ErrorResponse::field_errors_from_body(&body);
        if errors.is_empty() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            status = status.as_u16(),
            error_count = errors.len(),
            "Album rejected with field errors"
        );
        Err(CatalogError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        let config = BackendConfig::with_url("http://localhost:8000").unwrap();
        CatalogClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_debug_redacts_cookies() {
        let debug_str = format!("{:?}", client());
        assert!(debug_str.contains("[REDACTED]"));
        assert!(debug_str.contains("http://localhost:8000/"));
    }

    #[test]
    fn test_csrf_provider_url() {
        let provider = client().csrf_provider();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("http://localhost:8000/sanctum/csrf-cookie"));
    }

    #[test]
    fn test_validation_error_exposes_fields() {
        let error = CatalogError::Validation(vec![crate::FieldError::new("title", "Required")]);
        assert_eq!(error.field_errors().map(<[_]>::len), Some(1));
        assert!(CatalogError::Timeout.field_errors().is_none());
    }
}
