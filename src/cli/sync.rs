use crate::{
    churchtools::{self, ChurchToolsSession},
    config::{ChurchToolsConfig, SpotifyConfig},
    error, info,
    spotify::{self, AuthorizationCodeSource, SpotifyClient},
    success,
    types::Song,
    warning,
};

/// Runs the complete workflow: ChurchTools login, song retrieval, playlist sync.
pub async fn sync<C: AuthorizationCodeSource>(
    churchtools: &ChurchToolsConfig,
    spotify: &SpotifyConfig,
    code_source: &C,
    playlist_name: &str,
    limit: u32,
    category: Option<String>,
) {
    let songs = login_and_fetch_songs(churchtools, limit, category.as_deref()).await;
    create_spotify_playlist(&songs, playlist_name, spotify, code_source).await;
}

/// Logs into ChurchTools and collects all songs; exits the program on failure.
pub async fn login_and_fetch_songs(
    config: &ChurchToolsConfig,
    limit: u32,
    category: Option<&str>,
) -> Vec<Song> {
    let session = match ChurchToolsSession::login(config).await {
        Ok(session) => session,
        Err(e) => error!("Cannot log into ChurchTools at {}. Err: {}", config.base_url, e),
    };
    info!(
        "Logged into {} as person {}",
        session.base_url(),
        session.person_id()
    );

    match churchtools::get_all_songs(&session, limit, category).await {
        Ok(songs) => {
            match category {
                Some(category) => info!("Found {} songs in category '{}'", songs.len(), category),
                None => info!("Found {} songs", songs.len()),
            }
            songs
        }
        Err(e) => error!("Cannot fetch songs from ChurchTools. Err: {}", e),
    }
}

/// Rewrites the Spotify playlist `playlist_name` with the tracks of `songs`.
///
/// Authorization, user lookup and playlist failures end the sync with a
/// printed message; they never end the program.
pub async fn create_spotify_playlist<C: AuthorizationCodeSource>(
    songs: &[Song],
    playlist_name: &str,
    config: &SpotifyConfig,
    code_source: &C,
) {
    let Some(token) = spotify::auth::authorize(config, code_source).await else {
        warning!("Failed to get the token info. Exiting.");
        return;
    };

    let client = SpotifyClient::new(&config.api_url, token.access_token);

    match spotify::sync_playlist(&client, songs, playlist_name).await {
        Ok(report) => {
            if report.created {
                info!("Created playlist '{}'", report.playlist_name);
            }
            if report.failed_batches > 0 {
                warning!(
                    "{} batch(es) could not be added to the playlist.",
                    report.failed_batches
                );
            }
            success!(
                "Playlist '{}' updated successfully with {} tracks.",
                report.playlist_name,
                report.attempted
            );
        }
        Err(crate::Error::NoTrackIds) => warning!(
            "No valid Spotify links were found in the provided song list. No songs were added to the playlist."
        ),
        Err(e) => warning!("Error while updating playlist '{}': {}", playlist_name, e),
    }
}
