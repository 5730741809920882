//! Spotify Web API client.
//!
//! [`SpotifyApi`] wraps the Web API endpoints behind typed methods. All
//! reads go through [`SpotifyApi::make_request`], which fetches a fresh
//! client-credentials token before every call.
//!
//! Failures never reach the caller as errors. They are logged through
//! `tracing` and surface as `None`.

use std::fmt;
use std::sync::Arc;

use reqwest::{header::AUTHORIZATION, Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::auth::{self, Credentials};
use crate::config::{ClientConfig, USER_AGENT};
use crate::error::{Result, SpotifyError};
use crate::models::{Album, Artist, Page, Playlist, PlaylistItem, Track, UserProfile};

/// Envelope of `/artists/{id}/top-tracks`.
#[derive(Deserialize)]
struct TopTracks {
    tracks: Vec<Track>,
}

/// Envelope of `/search?type=track`.
#[derive(Deserialize)]
struct TrackSearch {
    tracks: Page<Track>,
}

/// Body of `POST /users/{id}/playlists`.
#[derive(Serialize)]
struct NewPlaylist<'a> {
    name: &'a str,
    description: &'a str,
    public: bool,
}

/// Spotify Web API client.
///
/// Holds the application credentials and the current access token. Clones
/// share the token slot, so a client can be handed to several tasks.
///
/// # Example
///
/// ```rust,no_run
/// use spotify_wrapper::SpotifyApi;
///
/// #[tokio::main]
/// async fn main() {
///     let api = SpotifyApi::new("client_id", "client_secret");
///     match api.get_playlist("37i9dQZF1DXcBWIGoYBM5M").await {
///         Some(playlist) => println!("{} ({} tracks)", playlist.name, playlist.tracks.items.len()),
///         None => eprintln!("playlist unavailable"),
///     }
/// }
/// ```
#[derive(Clone)]
pub struct SpotifyApi {
    client: Client,
    credentials: Credentials,
    config: ClientConfig,
    /// Last token obtained. Overwritten by every successful authentication.
    access_token: Arc<RwLock<Option<String>>>,
}

impl fmt::Debug for SpotifyApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyApi")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SpotifyApi {
    /// Create a client talking to the production Spotify hosts.
    pub fn new<S1: Into<String>, S2: Into<String>>(client_id: S1, client_secret: S2) -> Self {
        Self::with_config(client_id, client_secret, ClientConfig::default())
    }

    /// Create a client with custom endpoint URLs.
    pub fn with_config<S1: Into<String>, S2: Into<String>>(
        client_id: S1,
        client_secret: S2,
        config: ClientConfig,
    ) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            credentials: Credentials::new(client_id, client_secret),
            config,
            access_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Endpoint configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a Web API path, e.g. `endpoint("albums/4aawyAB9vmqN3uQ7FjRGTy")`.
    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// The token currently held, if any. Does not authenticate.
    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    /// Fetch a new token and store it.
    ///
    /// On failure the previous token, if any, is kept and the error is
    /// only logged.
    async fn authenticate(&self) {
        match auth::request_token(&self.client, &self.config.token_url, &self.credentials).await {
            Ok(token) => {
                debug!(
                    "Obtained {} token (expires in {}s)",
                    token.token_type.as_deref().unwrap_or("Bearer"),
                    token.expires_in.unwrap_or(0)
                );
                *self.access_token.write().await = Some(token.access_token);
            }
            Err(e) => error!("Error authenticating: {}", e),
        }
    }

    /// `Authorization` header value for the token held right now.
    async fn bearer(&self) -> Result<String> {
        self.access_token
            .read()
            .await
            .as_ref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(SpotifyError::MissingToken)
    }

    /// Authenticate, then GET `url` and parse the body.
    pub(crate) async fn try_get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        self.authenticate().await;
        let bearer = self.bearer().await?;

        debug!("GET {} with params: {:?}", url, params);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, bearer)
            .query(params)
            .send()
            .await?;

        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body with the token currently held. Does not authenticate.
    async fn try_post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<String> {
        let bearer = self.bearer().await?;

        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await?;

        read_body(response).await
    }

    /// Authenticated GET returning the parsed body.
    ///
    /// A new token is fetched before every call, even when one is already
    /// held. Returns `None` on any failure: authentication, transport,
    /// non-2xx status or a body that does not parse as `T`.
    ///
    /// If authentication fails and no earlier token is held, the GET is not
    /// sent at all; the result is `None` as it would be for a rejected
    /// request.
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Option<T> {
        match self.try_get(url, params).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error making request to {}: {}", url, e);
                None
            }
        }
    }

    /// Get a playlist by ID.
    pub async fn get_playlist(&self, playlist_id: &str) -> Option<Playlist> {
        let url = self.endpoint(&format!("playlists/{}", playlist_id));
        self.make_request(&url, &[]).await
    }

    /// Get the track listing of a playlist.
    pub async fn get_playlist_tracks(&self, playlist_id: &str) -> Option<Vec<PlaylistItem>> {
        let url = self.endpoint(&format!("playlists/{}/tracks", playlist_id));
        let page: Page<PlaylistItem> = self.make_request(&url, &[]).await?;
        Some(page.into_items())
    }

    /// Get a track by ID.
    pub async fn get_track(&self, track_id: &str) -> Option<Track> {
        let url = self.endpoint(&format!("tracks/{}", track_id));
        self.make_request(&url, &[]).await
    }

    /// Get an album by ID.
    pub async fn get_album(&self, album_id: &str) -> Option<Album> {
        let url = self.endpoint(&format!("albums/{}", album_id));
        self.make_request(&url, &[]).await
    }

    /// Get the track listing of an album.
    pub async fn get_album_tracks(&self, album_id: &str) -> Option<Vec<Track>> {
        let url = self.endpoint(&format!("albums/{}/tracks", album_id));
        let page: Page<Track> = self.make_request(&url, &[]).await?;
        Some(page.into_items())
    }

    /// Get an artist by ID.
    pub async fn get_artist(&self, artist_id: &str) -> Option<Artist> {
        let url = self.endpoint(&format!("artists/{}", artist_id));
        self.make_request(&url, &[]).await
    }

    /// Get a user's public profile.
    pub async fn get_user_profile(&self, user_id: &str) -> Option<UserProfile> {
        let url = self.endpoint(&format!("users/{}", user_id));
        self.make_request(&url, &[]).await
    }

    /// Get an artist's top tracks in a market (ISO 3166-1 alpha-2 code).
    pub async fn get_artist_top_tracks(&self, artist_id: &str, market: &str) -> Option<Vec<Track>> {
        let url = self.endpoint(&format!("artists/{}/top-tracks", artist_id));
        let response: TopTracks = self.make_request(&url, &[("market", market)]).await?;
        Some(response.tracks)
    }

    /// Get an artist's albums. The albums are simplified and carry no tracks.
    pub async fn get_artist_albums(&self, artist_id: &str) -> Option<Vec<Album>> {
        let url = self.endpoint(&format!("artists/{}/albums", artist_id));
        let page: Page<Album> = self.make_request(&url, &[]).await?;
        Some(page.into_items())
    }

    /// Search for tracks.
    pub async fn search_tracks(&self, query: &str) -> Option<Vec<Track>> {
        let url = self.endpoint("search");
        let response: TrackSearch = self
            .make_request(&url, &[("q", query), ("type", "track")])
            .await?;
        Some(response.tracks.into_items())
    }

    /// Create a playlist for a user.
    ///
    /// Uses the token already held and does not authenticate first, so at
    /// least one read must have succeeded on this client beforehand. With no
    /// token held the POST is not sent and the result is `None`.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Option<Playlist> {
        let url = self.endpoint(&format!("users/{}/playlists", user_id));
        let body = NewPlaylist {
            name,
            description,
            public,
        };

        let result = self
            .try_post(&url, &body)
            .await
            .and_then(|text| Ok(serde_json::from_str::<Playlist>(&text)?));

        match result {
            Ok(playlist) => {
                info!("Created playlist {} ({})", playlist.name, playlist.id);
                Some(playlist)
            }
            Err(e) => {
                error!("Error creating playlist: {}", e);
                None
            }
        }
    }

    /// Append tracks to a playlist by URI.
    ///
    /// Uses the token already held, like [`create_playlist`](Self::create_playlist),
    /// and sends nothing when no token is held. The response body is ignored
    /// and failures are only logged.
    pub async fn add_tracks_to_playlist(&self, playlist_id: &str, track_uris: &[String]) {
        let url = self.endpoint(&format!("playlists/{}/tracks", playlist_id));
        match self.try_post(&url, &json!({ "uris": track_uris })).await {
            Ok(_) => info!("Added {} tracks to playlist {}", track_uris.len(), playlist_id),
            Err(e) => error!("Error adding tracks to playlist: {}", e),
        }
    }
}

/// Read the body, turning a non-2xx status into [`SpotifyError::Status`].
async fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SpotifyError::Status {
            status: status.as_u16(),
            message: api_error_message(&body),
        });
    }

    Ok(body)
}

/// Message from a Web API error envelope: `{"error": {"status", "message"}}`.
fn api_error_message(body: &str) -> String {
    let json: Option<Value> = serde_json::from_str(body).ok();
    json.as_ref()
        .and_then(|j| j.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
