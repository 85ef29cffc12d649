use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{Result, config::SpotifyConfig, error::Error, spotify::auth, types::Token, warning};

/// Seconds before the real expiry at which a token counts as expired.
const EXPIRY_MARGIN: u64 = 60;

/// The on-disk Spotify token cache.
///
/// One JSON file at a fixed path, reused across runs until the token can no
/// longer be refreshed.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| Error::TokenCache(format!("{}: {}", path.display(), e)))?;
        let token: Token = serde_json::from_str(&content)
            .map_err(|e| Error::TokenCache(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            token,
            path: path.to_path_buf(),
        })
    }

    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::TokenCache(e.to_string()))?;
        }

        let json =
            serde_json::to_string_pretty(&self.token).map_err(|e| Error::TokenCache(e.to_string()))?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| Error::TokenCache(format!("{}: {}", self.path.display(), e)))
    }

    /// Returns the access token, refreshing and persisting it first if expired.
    pub async fn get_valid_token(&mut self, config: &SpotifyConfig) -> Result<String> {
        if self.is_expired() {
            let token = auth::refresh_token(config, &self.token.refresh_token).await?;
            self.replace_token(token).await;
        }

        Ok(self.token.access_token.clone())
    }

    /// Swaps in a refreshed token and writes it back.
    ///
    /// The new token stays in use when the cache cannot be written.
    pub async fn replace_token(&mut self, token: Token) {
        self.token = token;
        if let Err(e) = self.persist().await {
            warning!("Failed to save refreshed token to cache: {}", e);
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at.saturating_add(self.token.expires_in);
        now >= expires_at.saturating_sub(EXPIRY_MARGIN)
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
