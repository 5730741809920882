//! Client-credentials token exchange.
//!
//! Spotify issues app tokens through the OAuth2 client-credentials grant:
//! the app POSTs `grant_type=client_credentials` to the accounts service,
//! authenticated with HTTP Basic auth built from its id and secret.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header::AUTHORIZATION, Client};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SpotifyError};

/// Application credentials. Set once at construction and never rotated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a client id and secret.
    pub fn new<S1: Into<String>, S2: Into<String>>(client_id: S1, client_secret: S2) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// The application's client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// `Authorization` header value: `Basic base64(id:secret)`.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

/// Body of a successful token response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds. Read but not tracked.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Exchange the credentials for an access token.
///
/// Every failure, including transport errors, is reported as
/// [`SpotifyError::Authentication`].
pub(crate) async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse> {
    debug!("POST {} (client_credentials)", token_url);

    let response = client
        .post(token_url)
        .header(AUTHORIZATION, credentials.basic_auth_header())
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| SpotifyError::Authentication(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SpotifyError::Authentication(e.to_string()))?;

    if !status.is_success() {
        return Err(SpotifyError::Authentication(format!(
            "{}: {}",
            status.as_u16(),
            token_error_message(&body)
        )));
    }

    serde_json::from_str(&body).map_err(|e| {
        SpotifyError::Authentication(format!("malformed token response: {}", e))
    })
}

/// Pull the OAuth error description out of a token error body.
fn token_error_message(body: &str) -> String {
    let json: Option<Value> = serde_json::from_str(body).ok();
    json.as_ref()
        .and_then(|j| j.get("error_description").or_else(|| j.get("error")))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
