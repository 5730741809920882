//! Endpoint configuration for [`SpotifyApi`](crate::SpotifyApi).

/// Base URL for the Spotify Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Client-credentials token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("spotify-wrapper/", env!("CARGO_PKG_VERSION"));

/// Where the client sends its requests.
///
/// The default points at the production Spotify hosts. Override it to route
/// through a proxy or a local mock server.
///
/// ```rust
/// use spotify_wrapper::ClientConfig;
///
/// let config = ClientConfig::default()
///     .api_base_url("http://127.0.0.1:8080/v1")
///     .token_url("http://127.0.0.1:8080/api/token");
/// assert_eq!(config.api_base_url, "http://127.0.0.1:8080/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every Web API path, without a trailing slash.
    pub api_base_url: String,
    /// Full URL of the token endpoint.
    pub token_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the Web API base URL. A trailing slash is dropped.
    pub fn api_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the token endpoint URL.
    pub fn token_url<S: Into<String>>(mut self, url: S) -> Self {
        self.token_url = url.into();
        self
    }

    /// Join a path onto the API base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
