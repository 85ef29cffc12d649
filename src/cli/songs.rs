use tabled::Table;

use crate::{cli::login_and_fetch_songs, config::ChurchToolsConfig, info, utils};

/// Prints the songs as a table without touching Spotify.
pub async fn songs(config: &ChurchToolsConfig, limit: u32, category: Option<String>) {
    let songs = login_and_fetch_songs(config, limit, category.as_deref()).await;

    let with_link = songs
        .iter()
        .filter(|song| utils::spotify_link(song).is_some())
        .count();

    println!("{}", Table::new(utils::song_table_rows(&songs)));
    info!(
        "{} songs, {} with a Spotify link",
        songs.len(),
        with_link
    );
}
