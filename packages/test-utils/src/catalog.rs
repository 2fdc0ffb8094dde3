//! Mock catalog backend for testing the album flow
//!
//! Provides a [`MockCatalogServer`] that simulates the album list, album
//! creation and CSRF cookie endpoints.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Path of the CSRF cookie endpoint
pub const CSRF_PATH: &str = "/sanctum/csrf-cookie";

const MY_ALBUMS_PATH: &str = "/my-albums";
const CREATE_ALBUM_PATH: &str = "/create-album";

/// Mock catalog backend
///
/// Wraps a [`wiremock::MockServer`] with helpers for the endpoints the
/// "My Music" page uses, plus request inspection for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let server = MockCatalogServer::start().await;
/// server.mock_create_album_field_errors(&[("title", "The title field is required.")]).await;
///
/// // ... submit ...
///
/// assert_eq!(server.request_count("POST", "/create-album").await, 1);
/// ```
pub struct MockCatalogServer {
    server: MockServer,
}

impl MockCatalogServer {
    /// Start a new mock catalog backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Drop every mounted mock and the recorded requests
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Mount a CSRF endpoint that sets `XSRF-TOKEN` to `token`
    pub async fn mock_csrf_cookie(&self, token: &str) {
        let cookie = format!("XSRF-TOKEN={}; Path=/", token);

        Mock::given(method("GET"))
            .and(path(CSRF_PATH))
            .respond_with(
                ResponseTemplate::new(204).insert_header("Set-Cookie", cookie.as_str()),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a CSRF endpoint that fails
    pub async fn mock_csrf_failure(&self) {
        Mock::given(method("GET"))
            .and(path(CSRF_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful album list
    pub async fn mock_my_albums(&self, albums: Vec<AlbumFixture>) {
        let albums_json = Self::albums_json(albums);

        Mock::given(method("GET"))
            .and(path(MY_ALBUMS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(albums_json))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful album list that answers after `delay`
    pub async fn mock_my_albums_delayed(&self, albums: Vec<AlbumFixture>, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(MY_ALBUMS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::albums_json(albums))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount an album list that returns `first` once and `then` afterwards
    pub async fn mock_my_albums_then(&self, first: Vec<AlbumFixture>, then: Vec<AlbumFixture>) {
        let first_json = Self::albums_json(first);

        Mock::given(method("GET"))
            .and(path(MY_ALBUMS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_json))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;

        self.mock_my_albums(then).await;
    }

    /// Mount an album list that returns `first` once and fails afterwards
    pub async fn mock_my_albums_then_failure(&self, first: Vec<AlbumFixture>, status_code: u16) {
        let first_json = Self::albums_json(first);

        Mock::given(method("GET"))
            .and(path(MY_ALBUMS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(first_json))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;

        self.mock_my_albums_failure(status_code).await;
    }

    /// Mount an album list failure with the given status
    pub async fn mock_my_albums_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(MY_ALBUMS_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "message": "Server Error"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful album creation (201 Created)
    pub async fn mock_create_album_success(&self) {
        Mock::given(method("POST"))
            .and(path(CREATE_ALBUM_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Album created"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful album creation that answers after `delay`
    pub async fn mock_create_album_success_delayed(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(CREATE_ALBUM_PATH))
            .respond_with(ResponseTemplate::new(201).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful album creation that only matches when the
    /// `X-XSRF-TOKEN` header equals `token`; other requests get a 404
    pub async fn mock_create_album_requires_token(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path(CREATE_ALBUM_PATH))
            .and(header("X-XSRF-TOKEN", token))
            .respond_with(ResponseTemplate::new(201))
            .mount(&self.server)
            .await;
    }

    /// Mount a 422 response with `[{field, errorMessage}]` errors
    pub async fn mock_create_album_field_errors(&self, errors: &[(&str, &str)]) {
        let errors: Vec<serde_json::Value> = errors
            .iter()
            .map(|(field, message)| json!({ "field": field, "errorMessage": message }))
            .collect();

        self.mock_create_album_error(422, json!({ "errors": errors }))
            .await;
    }

    /// Mount a 422 response in the framework's `{field: [messages]}` shape
    pub async fn mock_create_album_validation_map(&self, errors: &[(&str, &str)]) {
        let errors: serde_json::Map<String, serde_json::Value> = errors
            .iter()
            .map(|(field, message)| (field.to_string(), json!([message])))
            .collect();

        self.mock_create_album_error(
            422,
            json!({ "message": "The given data was invalid.", "errors": errors }),
        )
        .await;
    }

    /// Mount an album creation failure with an arbitrary body
    pub async fn mock_create_album_error(&self, status_code: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(CREATE_ALBUM_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Requests received for `method` + `path`, in arrival order
    pub async fn requests_to(&self, http_method: &str, request_path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| {
                request.method.to_string() == http_method && request.url.path() == request_path
            })
            .collect()
    }

    /// Number of requests received for `method` + `path`
    pub async fn request_count(&self, http_method: &str, request_path: &str) -> usize {
        self.requests_to(http_method, request_path).await.len()
    }

    /// Paths of every request received, in arrival order
    pub async fn request_log(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| format!("{} {}", request.method, request.url.path()))
            .collect()
    }

    /// Bodies of every `POST /create-album`, decoded lossily
    pub async fn create_album_bodies(&self) -> Vec<String> {
        self.requests_to("POST", CREATE_ALBUM_PATH)
            .await
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }

    fn albums_json(albums: Vec<AlbumFixture>) -> serde_json::Value {
        json!(albums.iter().map(AlbumFixture::to_json).collect::<Vec<_>>())
    }
}

/// Fixture for album list responses
#[derive(Debug, Clone)]
pub struct AlbumFixture {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub cover: Option<String>,
    pub release_date: Option<i64>,
    pub genre: Option<i64>,
}

impl AlbumFixture {
    /// Create an album with a cover, a release date and a genre
    pub fn new(id: i64, title: &str, artist: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            cover: Some(format!("{}.jpg", title.to_lowercase().replace(' ', "-"))),
            release_date: Some(1_682_899_200_000),
            genre: Some(1),
        }
    }

    /// Create an album without optional fields
    pub fn bare(id: i64, title: &str, artist: &str) -> Self {
        Self {
            cover: None,
            release_date: None,
            genre: None,
            ..Self::new(id, title, artist)
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "artist": self.artist,
            "cover": self.cover,
            "release_date": self.release_date,
            "genre": self.genre
        })
    }
}
