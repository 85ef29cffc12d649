use serde::{Deserialize, Serialize};
use tabled::Tabled;

// ChurchTools

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub status: Option<String>,
    pub person_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Song {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: Option<SongCategory>,
    #[serde(default)]
    pub arrangements: Vec<Arrangement>,
}

impl Song {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongCategory {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arrangement {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "fileUrl", default)]
    pub file_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongsResponse {
    pub data: Vec<Song>,
    pub meta: SongsMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongsMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    pub current: u32,
    pub last_page: u32,
}

/// One page of the song listing.
#[derive(Debug, Clone)]
pub struct SongsPage {
    pub songs: Vec<Song>,
    pub pagination: Pagination,
}

impl From<SongsResponse> for SongsPage {
    fn from(res: SongsResponse) -> Self {
        SongsPage {
            songs: res.data,
            pagination: res.meta.pagination,
        }
    }
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub name: String,
    pub category: String,
    pub track: String,
}

// Spotify

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Code and state taken from the OAuth redirect.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationResponse {
    pub code: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSnapshotResponse {
    pub snapshot_id: String,
}

/// Outcome of a playlist sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub playlist_id: String,
    pub playlist_name: String,
    pub created: bool,
    pub attempted: usize,
    pub skipped_songs: Vec<String>,
    pub failed_batches: usize,
}
