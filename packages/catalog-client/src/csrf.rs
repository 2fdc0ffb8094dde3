//! CSRF token acquisition
//!
//! The backend issues an `XSRF-TOKEN` cookie from a dedicated endpoint. Write
//! requests echo the decoded cookie value back in the `X-XSRF-TOKEN` header.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Cookie that carries the anti-forgery token
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the token is sent back in
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Capability to refresh the anti-forgery token before a write request
#[async_trait]
pub trait CsrfTokenProvider: Send + Sync {
    /// Fetch a fresh token from the backend
    async fn refresh_token(&self) -> CatalogResult<()>;
}

/// Cookie-based provider sharing the catalog client's cookie jar
#[derive(Clone)]
pub struct CookieCsrfProvider {
    http_client: Client,
    csrf_url: String,
}

impl fmt::Debug for CookieCsrfProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieCsrfProvider")
            .field("csrf_url", &self.csrf_url)
            .finish()
    }
}

impl CookieCsrfProvider {
    pub(crate) fn new(http_client: Client, csrf_url: String) -> Self {
        Self {
            http_client,
            csrf_url,
        }
    }
}

#[async_trait]
impl CsrfTokenProvider for CookieCsrfProvider {
    #[instrument(skip(self))]
    async fn refresh_token(&self) -> CatalogResult<()> {
        let response = self
            .http_client
            .get(&self.csrf_url)
            .send()
            .await
            .map_err(CatalogError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Csrf(format!(
                "{} answered {}",
                self.csrf_url, status
            )));
        }

        debug!(url = %self.csrf_url, "Refreshed CSRF cookie");
        Ok(())
    }
}

/// Read and decode the current token for `url` from `jar`
pub(crate) fn xsrf_token(jar: &Arc<Jar>, url: &Url) -> Option<String> {
    let header = jar.cookies(url)?;
    let cookies = header.to_str().ok()?;
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == XSRF_COOKIE)
        .map(|(_, value)| percent_decode(value))
}

fn percent_decode(value: &str) -> String {
    // A literal '+' in a cookie value is data, not a space.
    let escaped = value.replace('+', "%2B");
    url::form_urlencoded::parse(format!("v={}", escaped).as_bytes())
        .next()
        .map(|(_, decoded)| decoded.into_owned())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar_with(cookie: &str, url: &Url) -> Arc<Jar> {
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(cookie, url);
        jar
    }

    #[test]
    fn test_xsrf_token_decodes_value() {
        let url = Url::parse("http://localhost:8000/").unwrap();
        let jar = jar_with("XSRF-TOKEN=eyJpdiI6%3D%3D; Path=/", &url);
        assert_eq!(xsrf_token(&jar, &url).as_deref(), Some("eyJpdiI6=="));
    }

    #[test]
    fn test_xsrf_token_keeps_plus() {
        let url = Url::parse("http://localhost:8000/").unwrap();
        let jar = jar_with("XSRF-TOKEN=a+b; Path=/", &url);
        assert_eq!(xsrf_token(&jar, &url).as_deref(), Some("a+b"));
    }

    #[test]
    fn test_xsrf_token_ignores_other_cookies() {
        let url = Url::parse("http://localhost:8000/").unwrap();
        let jar = jar_with("laravel_session=abc; Path=/", &url);
        assert_eq!(xsrf_token(&jar, &url), None);
    }

    #[test]
    fn test_xsrf_token_empty_jar() {
        let url = Url::parse("http://localhost:8000/").unwrap();
        let jar = Arc::new(Jar::default());
        assert_eq!(xsrf_token(&jar, &url), None);
    }
}
