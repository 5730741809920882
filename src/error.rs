//! Error types for the Spotify Web API client.
//!
//! These errors never cross the public API: the client logs them and
//! returns `None`. They exist so that the transport layer and its tests can
//! see the real cause of a failure.

use thiserror::Error;

/// Failure of a single call to Spotify.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The token endpoint rejected the credentials or sent an unusable body.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A bearer request was attempted before any token was obtained.
    #[error("No access token held")]
    MissingToken,

    /// The Web API answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl SpotifyError {
    /// Whether the failure happened while obtaining a token.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication(_) | Self::MissingToken)
    }

    /// HTTP status reported by the API, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Spotify operations.
pub type Result<T> = std::result::Result<T, SpotifyError>;
