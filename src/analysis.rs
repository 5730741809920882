//! Playlist audio-feature analysis.
//!
//! This module layers a small convenience type over [`SpotifyApi`] that
//! fetches audio features for one track or for every track of a playlist.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::api::SpotifyApi;
use crate::models::{AudioFeatures, Playlist, Track};

/// A playlist track paired with its audio features.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFeatures {
    /// The track, `None` for null playlist entries.
    pub track: Option<Track>,
    /// Its features, `None` when the fetch failed.
    pub features: Option<AudioFeatures>,
}

/// Fetches audio features through a shared [`SpotifyApi`].
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use spotify_wrapper::{PlaylistFeatureAnalyzer, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() {
///     let api = Arc::new(SpotifyApi::new("client_id", "client_secret"));
///     let analyzer = PlaylistFeatureAnalyzer::new(Arc::clone(&api));
///
///     if let Some(features) = analyzer.analyze_playlist("37i9dQZF1DXcBWIGoYBM5M").await {
///         let known = features.iter().flatten().count();
///         println!("features for {}/{} tracks", known, features.len());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlaylistFeatureAnalyzer {
    api: Arc<SpotifyApi>,
}

impl PlaylistFeatureAnalyzer {
    /// Create an analyzer on top of a shared client.
    pub fn new(api: Arc<SpotifyApi>) -> Self {
        Self { api }
    }

    /// The client this analyzer uses.
    pub fn api(&self) -> &Arc<SpotifyApi> {
        &self.api
    }

    /// Get the audio features of one track.
    pub async fn get_track_features(&self, track_id: &str) -> Option<AudioFeatures> {
        let url = self.api.endpoint(&format!("audio-features/{}", track_id));
        self.api.make_request(&url, &[]).await
    }

    /// Get the audio features of every track in a playlist, in playlist order.
    ///
    /// Returns `None` when the playlist itself could not be fetched; no
    /// feature requests are made in that case. Otherwise the feature
    /// requests run concurrently and a failed one leaves `None` in its slot.
    pub async fn analyze_playlist(&self, playlist_id: &str) -> Option<Vec<Option<AudioFeatures>>> {
        let results = self.analyze_playlist_tracks(playlist_id).await?;
        Some(results.into_iter().map(|r| r.features).collect())
    }

    /// Like [`analyze_playlist`](Self::analyze_playlist), keeping each track
    /// next to its features.
    pub async fn analyze_playlist_tracks(&self, playlist_id: &str) -> Option<Vec<TrackFeatures>> {
        let playlist = self.api.get_playlist(playlist_id).await?;
        Some(self.fetch_features(playlist).await)
    }

    async fn fetch_features(&self, playlist: Playlist) -> Vec<TrackFeatures> {
        let tracks: Vec<Option<Track>> = playlist
            .tracks
            .items
            .into_iter()
            .map(|item| item.track)
            .collect();

        debug!(
            "Fetching audio features for {} tracks of playlist {}",
            tracks.len(),
            playlist.id
        );

        let requests = tracks.iter().map(|track| async move {
            match track {
                Some(track) => self.get_track_features(&track.id).await,
                None => None,
            }
        });
        let features = join_all(requests).await;

        let nulls = tracks.iter().filter(|t| t.is_none()).count();
        if nulls > 0 {
            warn!("Playlist {} has {} unavailable entries", playlist.id, nulls);
        }

        tracks
            .into_iter()
            .zip(features)
            .map(|(track, features)| TrackFeatures { track, features })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use mockito::{Matcher, Mock, Server, ServerGuard};
    use serde_json::json;

    async fn setup() -> (ServerGuard, Mock, PlaylistFeatureAnalyzer) {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let mut server = Server::new_async().await;
        let token = server
            .mock("POST", "/api/token")
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#)
            .create_async()
            .await;
        let config = ClientConfig::default()
            .api_base_url(format!("{}/v1", server.url()))
            .token_url(format!("{}/api/token", server.url()));
        let api = Arc::new(SpotifyApi::with_config("id1", "secret1", config));
        (server, token, PlaylistFeatureAnalyzer::new(api))
    }

    async fn mock_features(server: &mut ServerGuard, id: &str, danceability: f64) -> Mock {
        server
            .mock("GET", format!("/v1/audio-features/{}", id).as_str())
            .match_header("authorization", "Bearer tok")
            .with_body(json!({"id": id, "danceability": danceability}).to_string())
            .expect(1)
            .create_async()
            .await
    }

    fn playlist_body(ids: &[&str]) -> String {
        let items: Vec<_> = ids
            .iter()
            .map(|id| json!({"track": {"id": id, "name": id.to_uppercase(), "artists": [{"name": "X"}]}}))
            .collect();
        json!({"id": "p1", "name": "Mix", "tracks": {"items": items}}).to_string()
    }

    #[tokio::test]
    async fn test_get_track_features() {
        let (mut server, _token, analyzer) = setup().await;
        let mock = mock_features(&mut server, "t1", 0.25).await;

        let features = analyzer.get_track_features("t1").await.unwrap();
        assert_eq!(features.danceability, Some(0.25));
        assert_eq!(features.id.as_deref(), Some("t1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_track_features_returned_verbatim() {
        let (mut server, _token, analyzer) = setup().await;
        let body = json!({
            "id": "t1",
            "danceability": 0.735,
            "tempo": 118.211,
            "type": "audio_features",
            "uri": "spotify:track:t1",
            "analysis_url": "https://api.spotify.com/v1/audio-analysis/t1"
        });
        let _features = server
            .mock("GET", "/v1/audio-features/t1")
            .with_body(body.to_string())
            .create_async()
            .await;

        let features = analyzer.get_track_features("t1").await.unwrap();
        assert_eq!(serde_json::to_value(&features).unwrap(), body);
    }

    #[tokio::test]
    async fn test_one_request_per_track_in_order() {
        let (mut server, _token, analyzer) = setup().await;
        let _playlist = server
            .mock("GET", "/v1/playlists/p1")
            .with_body(playlist_body(&["t1", "t2", "t3", "t4"]))
            .create_async()
            .await;
        let mocks = vec![
            mock_features(&mut server, "t1", 0.1).await,
            mock_features(&mut server, "t2", 0.2).await,
            mock_features(&mut server, "t3", 0.3).await,
            mock_features(&mut server, "t4", 0.4).await,
        ];

        let features = analyzer.analyze_playlist("p1").await.unwrap();
        let ids: Vec<_> = features
            .iter()
            .map(|f| f.as_ref().and_then(|f| f.id.clone()).unwrap())
            .collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4"]);

        for mock in mocks {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn test_missing_playlist_makes_no_feature_requests() {
        let (mut server, _token, analyzer) = setup().await;
        let _playlist = server
            .mock("GET", "/v1/playlists/gone")
            .with_status(404)
            .create_async()
            .await;
        let features = server
            .mock("GET", Matcher::Regex(r"^/v1/audio-features/".to_string()))
            .expect(0)
            .create_async()
            .await;

        assert_eq!(analyzer.analyze_playlist("gone").await, None);
        assert_eq!(analyzer.analyze_playlist_tracks("gone").await, None);
        features.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_playlist() {
        let (mut server, _token, analyzer) = setup().await;
        let _playlist = server
            .mock("GET", "/v1/playlists/p1")
            .with_body(playlist_body(&[]))
            .create_async()
            .await;

        assert_eq!(analyzer.analyze_playlist("p1").await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_null_entries_keep_their_slot() {
        let (mut server, _token, analyzer) = setup().await;
        let body = json!({"id": "p1", "name": "Mix", "tracks": {"items": [
            {"track": null},
            {"track": {"id": "t2", "name": "B", "artists": [{"name": "Y"}]}}
        ]}});
        let _playlist = server
            .mock("GET", "/v1/playlists/p1")
            .with_body(body.to_string())
            .create_async()
            .await;
        let t2 = mock_features(&mut server, "t2", 0.9).await;

        let results = analyzer.analyze_playlist_tracks("p1").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], TrackFeatures { track: None, features: None });
        assert_eq!(results[1].track.as_ref().unwrap().name, "B");
        assert_eq!(results[1].features.as_ref().unwrap().danceability, Some(0.9));
        t2.assert_async().await;
    }

    #[tokio::test]
    async fn test_slow_responses_keep_playlist_order() {
        use std::time::{Duration, Instant};

        use axum::extract::{Path, State};
        use axum::routing::{get, post};
        use axum::{Json, Router};
        use tokio::sync::Mutex;

        // t1 answers last, t2 in between, t3 first
        async fn features(
            Path(id): Path<String>,
            State(finished): State<Arc<Mutex<Vec<String>>>>,
        ) -> Json<serde_json::Value> {
            let delay = match id.as_str() {
                "t1" => 600,
                "t2" => 300,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            finished.lock().await.push(id.clone());
            Json(json!({"id": id}))
        }

        let finished: Arc<Mutex<Vec<String>>> = Arc::default();
        let app = Router::new()
            .route(
                "/api/token",
                post(|| async { Json(json!({"access_token": "tok", "token_type": "Bearer"})) }),
            )
            .route(
                "/v1/playlists/p1",
                get(|| async { playlist_body(&["t1", "t2", "t3"]) }),
            )
            .route("/v1/audio-features/{id}", get(features))
            .with_state(Arc::clone(&finished));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let config = ClientConfig::default()
            .api_base_url(format!("http://{}/v1", addr))
            .token_url(format!("http://{}/api/token", addr));
        let analyzer = PlaylistFeatureAnalyzer::new(Arc::new(SpotifyApi::with_config(
            "id1", "secret1", config,
        )));

        let started = Instant::now();
        let results = analyzer.analyze_playlist("p1").await.unwrap();
        let elapsed = started.elapsed();

        let ids: Vec<_> = results
            .iter()
            .map(|f| f.as_ref().and_then(|f| f.id.clone()).unwrap())
            .collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert_eq!(*finished.lock().await, vec!["t3", "t2", "t1"]);
        // one after another would take at least 900ms
        assert!(elapsed < Duration::from_millis(900), "took {:?}", elapsed);
    }
}
