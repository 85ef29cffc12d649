use reqwest::{Client, Response};

use crate::{
    Result,
    error::Error,
    spotify::PlaylistService,
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser, GetUserPlaylistsResponse,
        Playlist, PlaylistItemsRequest, PlaylistSnapshotResponse,
    },
};

/// Spotify Web API client bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(api_url: &str, access_token: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    async fn checked(response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::from_response(response).await)
        }
    }
}

impl PlaylistService for SpotifyClient {
    async fn current_user_id(&self) -> Result<String> {
        let response = self
            .client
            .get(format!("{}/me", self.api_url))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let user = Self::checked(response).await?.json::<CurrentUser>().await?;
        Ok(user.id)
    }

    async fn current_user_playlists(&self) -> Result<Vec<Playlist>> {
        let mut playlists: Vec<Playlist> = Vec::new();
        let mut next = Some(format!("{}/me/playlists?limit=50", self.api_url));

        while let Some(api_url) = next {
            let response = self
                .client
                .get(&api_url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let page = Self::checked(response)
                .await?
                .json::<GetUserPlaylistsResponse>()
                .await?;
            playlists.extend(page.items);
            next = page.next;
        }

        Ok(playlists)
    }

    async fn create_playlist(&self, user_id: &str, name: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/users/{}/playlists", self.api_url, user_id))
            .bearer_auth(&self.access_token)
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
                description: String::new(),
                public: true,
                collaborative: false,
            })
            .send()
            .await?;

        let playlist = Self::checked(response)
            .await?
            .json::<CreatePlaylistResponse>()
            .await?;
        Ok(playlist.id)
    }

    async fn replace_items(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let response = self
            .client
            .put(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(&self.access_token)
            .json(&PlaylistItemsRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?;

        Self::checked(response)
            .await?
            .json::<PlaylistSnapshotResponse>()
            .await?;
        Ok(())
    }

    async fn add_items(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(&self.access_token)
            .json(&PlaylistItemsRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?;

        Self::checked(response)
            .await?
            .json::<PlaylistSnapshotResponse>()
            .await?;
        Ok(())
    }
}
