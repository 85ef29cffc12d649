use std::sync::Mutex;

use ctsync::churchtools::{SongSource, get_all_songs};
use ctsync::error::Error;
use ctsync::types::{Pagination, Song, SongCategory, SongsPage};
use reqwest::StatusCode;

// In-memory song listing that records which pages were requested
struct FakeSource {
    pages: Vec<Vec<Song>>,
    requested: Mutex<Vec<(u32, u32)>>,
    fail_on: Option<u32>,
}

impl FakeSource {
    fn new(pages: Vec<Vec<Song>>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    fn requested(&self) -> Vec<(u32, u32)> {
        self.requested.lock().unwrap().clone()
    }
}

impl SongSource for FakeSource {
    async fn songs_page(&self, page: u32, limit: u32) -> ctsync::Result<SongsPage> {
        self.requested.lock().unwrap().push((page, limit));

        if self.fail_on == Some(page) {
            return Err(Error::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_string(),
            });
        }

        let songs = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();

        Ok(SongsPage {
            songs,
            pagination: Pagination {
                total: 0,
                limit,
                current: page,
                last_page: self.pages.len() as u32,
            },
        })
    }
}

fn song(name: &str, category: &str) -> Song {
    Song {
        name: name.to_string(),
        category: Some(SongCategory {
            id: 0,
            name: category.to_string(),
        }),
        ..Default::default()
    }
}

fn names(songs: &[Song]) -> Vec<&str> {
    songs.iter().map(|s| s.name.as_str()).collect()
}

#[tokio::test]
async fn test_get_all_songs_visits_every_page_once_in_order() {
    let source = FakeSource::new(vec![
        vec![song("A", "Worship"), song("B", "Hymns")],
        vec![song("C", "Worship")],
        vec![song("D", "Hymns"), song("E", "Worship")],
    ]);

    let songs = get_all_songs(&source, 2, None).await.unwrap();

    assert_eq!(names(&songs), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(source.requested(), vec![(1, 2), (2, 2), (3, 2)]);
}

#[tokio::test]
async fn test_get_all_songs_with_category_filter() {
    let source = FakeSource::new(vec![
        vec![song("A", "Worship"), song("B", "Hymns")],
        vec![song("C", "Worship"), song("D", "Hymns")],
    ]);

    let songs = get_all_songs(&source, 200, Some("Hymns")).await.unwrap();

    assert_eq!(names(&songs), vec!["B", "D"]);
    assert_eq!(source.requested().len(), 2);
}

#[tokio::test]
async fn test_get_all_songs_unmatched_filter_is_empty() {
    let source = FakeSource::new(vec![vec![song("A", "Worship")], vec![song("B", "Hymns")]]);

    let songs = get_all_songs(&source, 200, Some("Christmas")).await.unwrap();

    assert!(songs.is_empty());
    assert_eq!(source.requested().len(), 2);
}

#[tokio::test]
async fn test_get_all_songs_single_page() {
    let source = FakeSource::new(vec![vec![song("A", "Worship")]]);

    let songs = get_all_songs(&source, 200, None).await.unwrap();

    assert_eq!(names(&songs), vec!["A"]);
    assert_eq!(source.requested(), vec![(1, 200)]);
}

#[tokio::test]
async fn test_get_all_songs_empty_listing_stops_after_first_page() {
    // ChurchTools reports lastPage 0 for an empty listing
    let source = FakeSource::new(Vec::new());

    let songs = get_all_songs(&source, 200, None).await.unwrap();

    assert!(songs.is_empty());
    assert_eq!(source.requested(), vec![(1, 200)]);
}

#[tokio::test]
async fn test_get_all_songs_propagates_page_error() {
    let mut source = FakeSource::new(vec![vec![song("A", "Worship")], vec![song("B", "Worship")]]);
    source.fail_on = Some(2);

    let result = get_all_songs(&source, 200, None).await;

    assert!(matches!(result, Err(Error::Api { .. })));
    assert_eq!(source.requested(), vec![(1, 200), (2, 200)]);
}

#[test]
fn test_songs_response_deserialization() {
    let json = r#"{
        "data": [{
            "id": 12,
            "name": "Way Maker",
            "category": {"id": 3, "name": "Worship"},
            "arrangements": [{
                "id": 40,
                "name": "Standard",
                "files": [],
                "links": [{"name": "Spotify", "fileUrl": "https://open.spotify.com/track/abc123?si=xyz"}]
            }]
        }],
        "meta": {"count": 1, "all": 1, "pagination": {"total": 1, "limit": 200, "current": 1, "lastPage": 1}}
    }"#;

    let page: SongsPage = serde_json::from_str::<ctsync::types::SongsResponse>(json)
        .unwrap()
        .into();

    assert_eq!(page.songs.len(), 1);
    assert_eq!(page.songs[0].category_name(), Some("Worship"));
    assert_eq!(
        page.songs[0].arrangements[0].links[0].file_url,
        "https://open.spotify.com/track/abc123?si=xyz"
    );
    assert_eq!(page.pagination.current, 1);
    assert_eq!(page.pagination.last_page, 1);
}
