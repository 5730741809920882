//! User profile model.

use serde::{Deserialize, Serialize};

use super::common::{Followers, Image};

/// Public profile of a Spotify user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Spotify user ID.
    pub id: String,

    /// Display name. `None` when the user has not set one.
    pub display_name: Option<String>,

    /// Follower count.
    pub followers: Followers,

    /// Profile pictures.
    pub images: Vec<Image>,

    /// Spotify URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
