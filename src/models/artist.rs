//! Artist model.

use serde::{Deserialize, Serialize};

use super::common::{Followers, Image};

/// A full Spotify artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Spotify ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Genres associated with the artist.
    pub genres: Vec<String>,

    /// Popularity from 0 to 100.
    pub popularity: u32,

    /// Follower count.
    pub followers: Followers,

    /// Spotify URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Artist images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,
}
