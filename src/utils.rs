use rand::{Rng, distr::Alphanumeric};

use crate::types::{Song, SongTableRow};

/// Substring that marks a link as a Spotify web-player link.
pub const SPOTIFY_LINK_DOMAIN: &str = "open.spotify.com";

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Returns the first Spotify link of a song.
///
/// Arrangements are scanned in order and within each arrangement its links;
/// the first URL containing [`SPOTIFY_LINK_DOMAIN`] wins.
pub fn spotify_link(song: &Song) -> Option<&str> {
    song.arrangements
        .iter()
        .flat_map(|arrangement| arrangement.links.iter())
        .map(|link| link.file_url.as_str())
        .find(|url| url.contains(SPOTIFY_LINK_DOMAIN))
}

/// Takes the last path segment of a Spotify URL and drops its query string.
///
/// `https://open.spotify.com/track/abc123?si=xyz` gives `abc123`. The result
/// is not validated.
pub fn track_id_from_url(url: &str) -> &str {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    last_segment.split('?').next().unwrap_or(last_segment)
}

pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{track_id}")
}

/// Keeps only songs whose category name equals `category`.
///
/// An empty category means no filter.
pub fn filter_by_category(songs: Vec<Song>, category: Option<&str>) -> Vec<Song> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => songs
            .into_iter()
            .filter(|song| song.category_name() == Some(category))
            .collect(),
        None => songs,
    }
}

pub fn song_table_rows(songs: &[Song]) -> Vec<SongTableRow> {
    songs
        .iter()
        .map(|song| SongTableRow {
            name: song.name.clone(),
            category: song.category_name().unwrap_or("-").to_string(),
            track: spotify_link(song)
                .map(|url| track_id_from_url(url).to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}
