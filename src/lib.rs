//! # spotify-wrapper
//!
//! A thin async client for the Spotify Web API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use spotify_wrapper::{PlaylistFeatureAnalyzer, SpotifyApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = Arc::new(SpotifyApi::new("client_id", "client_secret"));
//!
//!     // Metadata
//!     if let Some(artist) = api.get_artist("4tZwfgrHOc3mvqYlEYSvVi").await {
//!         println!("{} ({} followers)", artist.name, artist.followers.total);
//!     }
//!
//!     // Audio features for a whole playlist
//!     let analyzer = PlaylistFeatureAnalyzer::new(Arc::clone(&api));
//!     if let Some(features) = analyzer.analyze_playlist("37i9dQZF1DXcBWIGoYBM5M").await {
//!         println!("{} tracks analyzed", features.len());
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! Public methods never return errors. Any failure (authentication,
//! transport, non-2xx status, unexpected body) is logged through `tracing`
//! and surfaces as `None`. An empty list always means Spotify answered with
//! an empty list.
//!
//! ## Authentication
//!
//! The client uses the client-credentials grant and fetches a new token
//! before every read. Playlist mutations reuse the token already held.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use analysis::{PlaylistFeatureAnalyzer, TrackFeatures};
pub use api::{Credentials, SpotifyApi};
pub use config::ClientConfig;
pub use error::SpotifyError;
pub use models::{
    Album, Artist, AudioFeatures, Page, Playlist, PlaylistItem, Track, UserProfile,
};
