use ctsync::spotify::auth::parse_redirect;
use ctsync::types::{Arrangement, Link, Song, SongCategory};
use ctsync::utils::*;

// Helper function to create a test link
fn link(url: &str) -> Link {
    Link {
        name: "link".to_string(),
        file_url: url.to_string(),
    }
}

// Helper function to create a test song
fn create_test_song(name: &str, category: &str, arrangements: Vec<Vec<&str>>) -> Song {
    Song {
        id: 1,
        name: name.to_string(),
        category: Some(SongCategory {
            id: 1,
            name: category.to_string(),
        }),
        arrangements: arrangements
            .into_iter()
            .enumerate()
            .map(|(i, urls)| Arrangement {
                id: i as u64,
                name: format!("Arrangement {}", i),
                links: urls.into_iter().map(link).collect(),
            })
            .collect(),
    }
}

#[test]
fn test_track_id_from_url() {
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/abc123?si=xyz"),
        "abc123"
    );

    // Without query string
    assert_eq!(
        track_id_from_url("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );

    // Localized links keep only the last segment
    assert_eq!(
        track_id_from_url("https://open.spotify.com/intl-de/track/def456?si=1&context=x"),
        "def456"
    );

    // Not validated: a trailing slash gives an empty id
    assert_eq!(track_id_from_url("https://open.spotify.com/track/"), "");
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("abc123"), "spotify:track:abc123");
}

#[test]
fn test_spotify_link_picks_first_relevant_link() {
    let song = create_test_song(
        "Amazing Grace",
        "Hymns",
        vec![
            vec!["https://youtube.com/watch?v=1", "https://example.org/sheet.pdf"],
            vec![
                "https://open.spotify.com/track/first?si=a",
                "https://open.spotify.com/track/second",
            ],
            vec!["https://open.spotify.com/track/third"],
        ],
    );

    assert_eq!(
        spotify_link(&song),
        Some("https://open.spotify.com/track/first?si=a")
    );
}

#[test]
fn test_spotify_link_missing() {
    let song = create_test_song(
        "No Link",
        "Hymns",
        vec![vec!["https://youtube.com/watch?v=1"], vec![]],
    );
    assert_eq!(spotify_link(&song), None);

    // Song without arrangements at all
    let song = create_test_song("Empty", "Hymns", vec![]);
    assert_eq!(spotify_link(&song), None);
}

#[test]
fn test_filter_by_category() {
    let songs = vec![
        create_test_song("A", "Worship", vec![]),
        create_test_song("B", "Hymns", vec![]),
        create_test_song("C", "Worship", vec![]),
    ];

    let filtered = filter_by_category(songs.clone(), Some("Worship"));
    let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);

    // Exact, case-sensitive match
    assert!(filter_by_category(songs.clone(), Some("worship")).is_empty());

    // No filter keeps everything
    assert_eq!(filter_by_category(songs, None).len(), 3);
}

#[test]
fn test_filter_by_empty_category_keeps_everything() {
    let songs = vec![
        create_test_song("A", "Worship", vec![]),
        create_test_song("B", "Hymns", vec![]),
    ];

    assert_eq!(filter_by_category(songs, Some("")).len(), 2);
}

#[test]
fn test_filter_by_category_skips_songs_without_category() {
    let mut song = create_test_song("Loose", "Worship", vec![]);
    song.category = None;

    assert!(filter_by_category(vec![song], Some("Worship")).is_empty());
}

#[test]
fn test_song_table_rows() {
    let songs = vec![
        create_test_song(
            "With Link",
            "Worship",
            vec![vec!["https://open.spotify.com/track/abc?si=1"]],
        ),
        create_test_song("Without Link", "Hymns", vec![]),
    ];

    let rows = song_table_rows(&songs);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].track, "abc");
    assert_eq!(rows[0].category, "Worship");
    assert_eq!(rows[1].track, "-");
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_parse_redirect_full_url() {
    let response =
        parse_redirect("  http://127.0.0.1:8888/callback?code=AQB123&state=xyz \n");

    assert_eq!(response.code.as_deref(), Some("AQB123"));
    assert_eq!(response.state.as_deref(), Some("xyz"));
    assert_eq!(response.code_for_state("xyz"), Some("AQB123".to_string()));
}

#[test]
fn test_parse_redirect_rejects_other_state() {
    let response = parse_redirect("http://127.0.0.1:8888/callback?code=AQB123&state=xyz");
    assert_eq!(response.code_for_state("other"), None);
}

#[test]
fn test_parse_redirect_access_denied() {
    let response = parse_redirect("http://127.0.0.1:8888/callback?error=access_denied&state=xyz");
    assert_eq!(response.code, None);
    assert_eq!(response.code_for_state("xyz"), None);
}

#[test]
fn test_parse_redirect_bare_code_and_query() {
    // A bare code is taken as is and has no state to check
    let response = parse_redirect("AQB123");
    assert_eq!(response.code_for_state("anything"), Some("AQB123".to_string()));

    let response = parse_redirect("?code=AQB456&state=s1");
    assert_eq!(response.code_for_state("s1"), Some("AQB456".to_string()));

    // URL without code
    let response = parse_redirect("http://127.0.0.1:8888/callback");
    assert_eq!(response.code_for_state("s1"), None);

    // Nothing pasted
    assert_eq!(parse_redirect("   ").code_for_state("s1"), None);
}
