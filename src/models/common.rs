//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Generic paging envelope used by list endpoints.
///
/// Only `items` is required; the paging cursors are kept when Spotify sends
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The wrapped objects.
    pub items: Vec<T>,

    /// Total number of items available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    /// Maximum number of items in this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Offset of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// URL of the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            limit: None,
            offset: None,
            next: None,
        }
    }
}

impl<T> Page<T> {
    /// Consume the page and return its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Follower count of an artist or user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Followers {
    /// Total number of followers.
    pub total: u64,
}

/// Image with URL and optional dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, when known.
    #[serde(default)]
    pub height: Option<u32>,

    /// Width in pixels, when known.
    #[serde(default)]
    pub width: Option<u32>,
}

/// Simplified artist as nested in tracks and albums.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    /// Artist name.
    pub name: String,

    /// Spotify ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Spotify URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl ArtistRef {
    /// Create an artist reference with just a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Join artist names with a separator.
pub(crate) fn join_artist_names(artists: &[ArtistRef], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_requires_items() {
        let missing: Result<Page<ArtistRef>, _> = serde_json::from_str(r#"{"total": 3}"#);
        assert!(missing.is_err());

        let page: Page<ArtistRef> =
            serde_json::from_str(r#"{"items": [{"name": "X"}], "total": 1}"#).unwrap();
        assert_eq!(page.items, vec![ArtistRef::new("X")]);
        assert_eq!(page.total, Some(1));
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_join_artist_names() {
        let artists = vec![ArtistRef::new("X"), ArtistRef::new("Y")];
        assert_eq!(join_artist_names(&artists, ", "), "X, Y");
        assert_eq!(join_artist_names(&[], ", "), "");
    }
}
