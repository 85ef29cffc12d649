use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    churchtools::ChurchToolsSession,
    error::Error,
    types::{Song, SongsPage, SongsResponse},
    utils,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 200;

/// Anything that can hand out pages of the song listing.
pub trait SongSource {
    /// Fetches page `page` (1-based) holding at most `limit` songs.
    fn songs_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<SongsPage>>;
}

impl SongSource for ChurchToolsSession {
    async fn songs_page(&self, page: u32, limit: u32) -> Result<SongsPage> {
        let response = self
            .client()
            .get(format!("{}/api/songs", self.base_url()))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let json = response.json::<SongsResponse>().await?;
        Ok(json.into())
    }
}

/// Collects every song of the listing, in listing order.
///
/// Pages are requested starting at 1 until the pagination reports
/// `current >= lastPage`. When `category_filter` is set only songs whose
/// category name matches it exactly are kept; a filter matching nothing
/// gives an empty vector.
pub async fn get_all_songs<S: SongSource>(
    source: &S,
    limit: u32,
    category_filter: Option<&str>,
) -> Result<Vec<Song>> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut all_songs: Vec<Song> = Vec::new();
    let mut current_page = 1;

    loop {
        let page = match source.songs_page(current_page, limit).await {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        all_songs.extend(utils::filter_by_category(page.songs, category_filter));
        pb.set_message(format!(
            "Fetching songs... page {}/{}",
            page.pagination.current, page.pagination.last_page
        ));

        if page.pagination.current >= page.pagination.last_page {
            break;
        }

        current_page += 1;
    }

    pb.finish_and_clear();
    Ok(all_songs)
}
