//! Catalog backend connection settings

use url::Url;

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Default backend URL used by local development setups
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default path of the CSRF cookie endpoint
pub const DEFAULT_CSRF_PATH: &str = "/sanctum/csrf-cookie";

/// Connection settings for the catalog backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base URL (e.g., http://localhost:8000)
    pub api_url: Url,

    /// Base URL that serves uploaded files such as album covers
    pub storage_url: Url,

    /// Path of the endpoint that issues the `XSRF-TOKEN` cookie
    pub csrf_path: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// `SOUNDSHELF_STORAGE_URL` falls back to the API URL when unset.
    pub fn from_env() -> ConfigResult<Self> {
        let api_raw = get_env_or_default("SOUNDSHELF_API_URL", DEFAULT_API_URL);
        let api_url = parse_url("SOUNDSHELF_API_URL", &api_raw)?;
        let storage_url = match std::env::var("SOUNDSHELF_STORAGE_URL") {
            Ok(raw) => parse_url("SOUNDSHELF_STORAGE_URL", &raw)?,
            Err(_) => api_url.clone(),
        };

        let csrf_path = get_env_or_default("SOUNDSHELF_CSRF_PATH", DEFAULT_CSRF_PATH);
        if !csrf_path.starts_with('/') {
            return Err(ConfigError::InvalidValue(
                "SOUNDSHELF_CSRF_PATH".to_string(),
                "path must start with '/'".to_string(),
            ));
        }

        Ok(Self {
            api_url,
            storage_url,
            csrf_path,
            timeout_secs: parse_env("SOUNDSHELF_TIMEOUT", 30)?,
            connect_timeout_secs: parse_env("SOUNDSHELF_CONNECT_TIMEOUT", 5)?,
        })
    }

    /// Create a configuration pointing at a custom URL (useful for testing)
    pub fn with_url(url: &str) -> ConfigResult<Self> {
        let api_url = parse_url("url", url)?;
        Ok(Self {
            storage_url: api_url.clone(),
            api_url,
            csrf_path: DEFAULT_CSRF_PATH.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        })
    }

    /// Get the full URL for an API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        join(&self.api_url, path)
    }

    /// Get the full URL of the CSRF cookie endpoint
    pub fn csrf_url(&self) -> String {
        join(&self.api_url, &self.csrf_path)
    }

    /// Get the public URL of a stored album cover
    pub fn cover_url(&self, cover: &str) -> String {
        join(
            &self.storage_url,
            &format!("storage/images/covers/{}", cover),
        )
    }
}

fn parse_url(name: &str, raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

fn join(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_url_defaults() {
        let config = BackendConfig::with_url("http://localhost:8000").unwrap();
        assert_eq!(config.csrf_path, "/sanctum/csrf-cookie");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.storage_url, config.api_url);
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = BackendConfig::with_url("http://localhost:8000/").unwrap();
        assert_eq!(
            config.endpoint("/my-albums"),
            "http://localhost:8000/my-albums"
        );
        assert_eq!(
            config.endpoint("create-album"),
            "http://localhost:8000/create-album"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = BackendConfig::with_url("https://music.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("my-albums"),
            "https://music.example.com/api/my-albums"
        );
    }

    #[test]
    fn test_csrf_url() {
        let config = BackendConfig::with_url("http://localhost:8000").unwrap();
        assert_eq!(
            config.csrf_url(),
            "http://localhost:8000/sanctum/csrf-cookie"
        );
    }

    #[test]
    fn test_cover_url() {
        let config = BackendConfig::with_url("http://localhost:8000").unwrap();
        assert_eq!(
            config.cover_url("abc.png"),
            "http://localhost:8000/storage/images/covers/abc.png"
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        let result = BackendConfig::with_url("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = BackendConfig::with_url("ftp://files.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "SOUNDSHELF_API_URL",
                "SOUNDSHELF_STORAGE_URL",
                "SOUNDSHELF_CSRF_PATH",
                "SOUNDSHELF_TIMEOUT",
                "SOUNDSHELF_CONNECT_TIMEOUT",
            ],
            || {
                let config = BackendConfig::from_env().unwrap();
                assert_eq!(config.api_url.as_str(), "http://localhost:8000/");
                assert_eq!(config.connect_timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_from_env_storage_url_override() {
        temp_env::with_vars(
            [
                ("SOUNDSHELF_API_URL", Some("http://api.local")),
                ("SOUNDSHELF_STORAGE_URL", Some("http://cdn.local")),
            ],
            || {
                let config = BackendConfig::from_env().unwrap();
                assert_eq!(
                    config.cover_url("x.jpg"),
                    "http://cdn.local/storage/images/covers/x.jpg"
                );
            },
        );
    }

    #[test]
    fn test_from_env_invalid_timeout() {
        temp_env::with_var("SOUNDSHELF_TIMEOUT", Some("soon"), || {
            match BackendConfig::from_env() {
                Err(ConfigError::InvalidValue(name, _)) => {
                    assert_eq!(name, "SOUNDSHELF_TIMEOUT")
                }
                other => panic!("expected InvalidValue, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_from_env_relative_csrf_path() {
        temp_env::with_var("SOUNDSHELF_CSRF_PATH", Some("csrf"), || {
            let result = BackendConfig::from_env();
            assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
        });
    }
}
