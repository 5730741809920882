//! Album model.

use serde::{Deserialize, Serialize};

use super::common::{join_artist_names, ArtistRef, Image, Page};
use super::track::Track;

/// A Spotify album.
///
/// Full album objects carry their track listing. Simplified albums, such as
/// those returned by the artist-albums endpoint, have none and deserialize
/// with an empty `tracks` page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Spotify ID.
    pub id: String,

    /// Album name.
    pub name: String,

    /// Album artists.
    pub artists: Vec<ArtistRef>,

    /// Track listing.
    #[serde(default)]
    pub tracks: Page<Track>,

    /// Album type: "album", "single", or "compilation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,

    /// Release date as sent by Spotify (year, year-month or full date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Total number of tracks.
    #[serde(default)]
    pub total_tracks: u32,

    /// Spotify URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Cover images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Album {
    /// Get all artist names as a joined string.
    pub fn artists_string(&self, separator: &str) -> String {
        join_artist_names(&self.artists, separator)
    }

    /// Release year, if a release date is present.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }
}
