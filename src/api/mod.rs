//! Spotify Web API client.
//!
//! - [`SpotifyApi`]: typed access to the Web API endpoints
//! - [`Credentials`]: application id and secret for the client-credentials grant

pub mod auth;
pub mod client;

pub use auth::Credentials;
pub use client::SpotifyApi;
