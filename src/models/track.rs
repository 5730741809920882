//! Track model.

use serde::{Deserialize, Serialize};

use super::common::{join_artist_names, ArtistRef, Image};

/// Album as nested inside a track object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackAlbum {
    /// Spotify ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Album name.
    pub name: String,

    /// Cover images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,
}

/// A Spotify track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Spotify ID.
    pub id: String,

    /// Track name.
    pub name: String,

    /// Performing artists.
    pub artists: Vec<ArtistRef>,

    /// Spotify URI (`spotify:track:...`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Duration in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,

    /// Whether the track has explicit lyrics.
    #[serde(default)]
    pub explicit: bool,

    /// Popularity from 0 to 100. Absent on simplified tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,

    /// Album the track appears on. Absent on album track listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<TrackAlbum>,
}

impl Track {
    /// Get all artist names as a joined string.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artist_names(&self.artists, separator)
    }

    /// Spotify URI, derived from the ID when the API omitted it.
    pub fn uri(&self) -> String {
        self.uri
            .clone()
            .unwrap_or_else(|| format!("spotify:track:{}", self.id))
    }
}
