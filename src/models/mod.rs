//! Data models for Spotify Web API responses.
//!
//! This module contains the structures used to represent playlists,
//! tracks, albums, artists, user profiles and audio features.

pub mod album;
pub mod artist;
pub mod common;
pub mod features;
pub mod playlist;
pub mod track;
pub mod user;

// Re-exports for convenience
pub use album::Album;
pub use artist::Artist;
pub use common::{ArtistRef, Followers, Image, Page};
pub use features::AudioFeatures;
pub use playlist::{Playlist, PlaylistItem, PlaylistOwner};
pub use track::{Track, TrackAlbum};
pub use user::UserProfile;
