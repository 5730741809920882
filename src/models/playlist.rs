//! Playlist models.

use serde::{Deserialize, Serialize};

use super::common::{Image, Page};
use super::track::Track;

/// Playlist owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistOwner {
    /// Spotify user ID.
    pub id: String,

    /// Display name, if the user set one.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One entry of a playlist's track listing.
///
/// `track` is `None` when Spotify returns `null` for the entry, which happens
/// for removed or local tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistItem {
    /// The wrapped track.
    pub track: Option<Track>,

    /// When the track was added (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

/// A Spotify playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    /// Spotify ID.
    pub id: String,

    /// Playlist name.
    pub name: String,

    /// Track listing.
    pub tracks: Page<PlaylistItem>,

    /// Playlist description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the playlist is public. `None` when Spotify does not say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Spotify URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Owner of the playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<PlaylistOwner>,

    /// Cover images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
}

impl Playlist {
    /// Iterate over the tracks of the listing, skipping null entries.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.items.iter().filter_map(|item| item.track.as_ref())
    }
}
