use std::future::Future;

use crate::{
    Result,
    error::Error,
    types::{Playlist, Song, SyncReport},
    utils, warning,
};

/// Maximum number of items Spotify accepts per add request.
pub const BATCH_SIZE: usize = 100;

/// The playlist operations the sync needs from Spotify.
pub trait PlaylistService {
    fn current_user_id(&self) -> impl Future<Output = Result<String>>;

    /// All playlists of the current user, across every page.
    fn current_user_playlists(&self) -> impl Future<Output = Result<Vec<Playlist>>>;

    /// Creates a public playlist and returns its id.
    fn create_playlist(&self, user_id: &str, name: &str) -> impl Future<Output = Result<String>>;

    /// Replaces every item of the playlist with `uris`.
    fn replace_items(&self, playlist_id: &str, uris: &[String]) -> impl Future<Output = Result<()>>;

    /// Appends `uris` (at most [`BATCH_SIZE`]) to the playlist.
    fn add_items(&self, playlist_id: &str, uris: &[String]) -> impl Future<Output = Result<()>>;
}

/// Returns the id of the user's playlist named `playlist_name`, creating it if needed.
///
/// Only a playlist whose name matches exactly *and* which is owned by
/// `user_id` is reused. The flag is `true` when the playlist was created.
pub async fn find_or_create_playlist<S: PlaylistService>(
    service: &S,
    user_id: &str,
    playlist_name: &str,
) -> Result<(String, bool)> {
    let playlists = service.current_user_playlists().await?;
    if let Some(playlist) = playlists
        .into_iter()
        .find(|p| p.name == playlist_name && p.owner.id == user_id)
    {
        return Ok((playlist.id, false));
    }

    let id = service.create_playlist(user_id, playlist_name).await?;
    Ok((id, true))
}

/// Replaces the content of a playlist with the Spotify tracks of `songs`.
///
/// The playlist is cleared first, then the first Spotify link of every song
/// is turned into a track and added in batches of [`BATCH_SIZE`], keeping the
/// song order. Songs without a link are skipped with a warning. A rejected
/// batch is reported and the remaining batches are still sent.
///
/// # Errors
///
/// - Failing user lookup, playlist lookup/creation or clearing
/// - [`Error::NoTrackIds`] when no song had a link; nothing is added then
pub async fn sync_playlist<S: PlaylistService>(
    service: &S,
    songs: &[Song],
    playlist_name: &str,
) -> Result<SyncReport> {
    let user_id = service.current_user_id().await?;
    let (playlist_id, created) = find_or_create_playlist(service, &user_id, playlist_name).await?;

    service.replace_items(&playlist_id, &[]).await?;

    let mut track_uris: Vec<String> = Vec::new();
    let mut skipped_songs: Vec<String> = Vec::new();

    for song in songs {
        match utils::spotify_link(song) {
            Some(link) => track_uris.push(utils::track_uri(utils::track_id_from_url(link))),
            None => {
                warning!("No Spotify link found for the song '{}'.", song.name);
                skipped_songs.push(song.name.clone());
            }
        }
    }

    if track_uris.is_empty() {
        return Err(Error::NoTrackIds);
    }

    let mut failed_batches = 0;
    for chunk in track_uris.chunks(BATCH_SIZE) {
        if let Err(e) = service.add_items(&playlist_id, chunk).await {
            warning!("Error while adding batch to the playlist: {}", e);
            failed_batches += 1;
        }
    }

    Ok(SyncReport {
        playlist_id,
        playlist_name: playlist_name.to_string(),
        created,
        attempted: track_uris.len(),
        skipped_songs,
        failed_batches,
    })
}
