use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use spotify_wrapper::{PlaylistFeatureAnalyzer, SpotifyApi};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify-cli")]
#[command(about = "Query the Spotify Web API with app credentials", long_about = None)]
struct Cli {
    /// Spotify client id (can also be set via SPOTIFY_CLIENT_ID env var)
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    client_id: String,

    /// Spotify client secret (can also be set via SPOTIFY_CLIENT_SECRET env var)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a playlist
    Playlist { id: String },
    /// Show an album
    Album { id: String },
    /// Show an artist
    Artist { id: String },
    /// Show a user's public profile
    User { id: String },
    /// Show an artist's top tracks
    TopTracks {
        id: String,

        /// Market as an ISO 3166-1 alpha-2 country code
        #[arg(short, long, default_value = "US")]
        market: String,
    },
    /// List an artist's albums
    Albums { id: String },
    /// Search for tracks
    Search { query: String },
    /// Show the audio features of a track
    Features { id: String },
    /// Show the audio features of every track in a playlist
    Analyze { id: String },
}

fn print<T: Serialize>(value: Option<T>) -> ExitCode {
    match value.map(|v| serde_json::to_string_pretty(&v)) {
        Some(Ok(json)) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            eprintln!("Could not encode response: {}", e);
            ExitCode::FAILURE
        }
        None => {
            eprintln!("No result (set RUST_LOG=spotify_wrapper=debug for details)");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = Arc::new(SpotifyApi::new(cli.client_id, cli.client_secret));

    match &cli.command {
        Commands::Playlist { id } => print(api.get_playlist(id).await),
        Commands::Album { id } => print(api.get_album(id).await),
        Commands::Artist { id } => print(api.get_artist(id).await),
        Commands::User { id } => print(api.get_user_profile(id).await),
        Commands::TopTracks { id, market } => print(api.get_artist_top_tracks(id, market).await),
        Commands::Albums { id } => print(api.get_artist_albums(id).await),
        Commands::Search { query } => {
            let tracks = api.search_tracks(query).await;
            if let Some(tracks) = &tracks {
                for (i, track) in tracks.iter().enumerate() {
                    eprintln!(
                        "{}. {} - {} ({})",
                        i + 1,
                        track.artists_string(", "),
                        track.name,
                        track.uri()
                    );
                }
            }
            print(tracks)
        }
        Commands::Features { id } => {
            let analyzer = PlaylistFeatureAnalyzer::new(Arc::clone(&api));
            print(analyzer.get_track_features(id).await)
        }
        Commands::Analyze { id } => {
            let analyzer = PlaylistFeatureAnalyzer::new(Arc::clone(&api));
            print(analyzer.analyze_playlist(id).await)
        }
    }
}
