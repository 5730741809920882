//! Audio features model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Audio features of one track, as returned by `/audio-features/{id}`.
///
/// The object is passed through unchanged: every known field is optional,
/// and keys without a field of their own (`type`, `uri`, `track_href`,
/// `analysis_url`, ...) are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danceability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    /// Pitch class, -1 when no key was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<i32>,
    /// Overall loudness in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loudness: Option<f64>,
    /// 1 for major, 0 for minor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speechiness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acousticness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrumentalness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valence: Option<f64>,
    /// Estimated tempo in BPM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<i32>,

    /// Remaining keys of the response object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
