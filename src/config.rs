//! Configuration management for ctsync.
//!
//! Values are read from environment variables, optionally populated from
//! `.env` files. Two locations are tried, both are optional:
//! 1. `.env` in the local data directory (`<data_local_dir>/ctsync/.env`)
//! 2. `.env` in the current working directory
//!
//! Variables already present in the environment are never overwritten.
//! The loaded values are collected into immutable [`ChurchToolsConfig`] and
//! [`SpotifyConfig`] structs which are passed explicitly to every operation.

use std::{env, path::PathBuf};

use crate::{Result, error::Error};

pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_CACHE: &str = ".spotify_cache";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public user-library-read";

/// Loads environment variables from the `.env` files.
///
/// Creates the data directory if it doesn't exist so users know where to put
/// their `.env`. A missing file is not an error; a malformed one is.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/ctsync/.env`
/// - macOS: `~/Library/Application Support/ctsync/.env`
/// - Windows: `%LOCALAPPDATA%/ctsync/.env`
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    for candidate in [path, PathBuf::from(".env")] {
        if !candidate.is_file() {
            continue;
        }
        dotenv::from_path(&candidate)
            .map_err(|e| format!("{}: {}", candidate.display(), e))?;
    }

    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ctsync/.env");
    path
}

/// Credentials for the ChurchTools instance.
#[derive(Clone)]
pub struct ChurchToolsConfig {
    pub base_url: String,
    pub email: String,
    pub password: String,
}

impl ChurchToolsConfig {
    /// Reads `CHURCHTOOLS_BASE_URL`, `CHURCHTOOLS_EMAIL` and `CHURCHTOOLS_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: required("CHURCHTOOLS_BASE_URL")?,
            email: required("CHURCHTOOLS_EMAIL")?,
            password: required("CHURCHTOOLS_PASSWORD")?,
        })
    }
}

impl std::fmt::Debug for ChurchToolsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChurchToolsConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Spotify application credentials and endpoints.
#[derive(Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub token_cache: PathBuf,
    pub server_addr: String,
}

impl SpotifyConfig {
    /// Reads the `SPOTIFY_*` variables and `SERVER_ADDRESS`.
    ///
    /// Client id, client secret and redirect URI are required, everything else
    /// falls back to the public Spotify endpoints and `.spotify_cache`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: SPOTIFY_SCOPE.to_string(),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            token_cache: PathBuf::from(optional("SPOTIFY_TOKEN_CACHE", DEFAULT_TOKEN_CACHE)),
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        })
    }
}

impl std::fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("token_cache", &self.token_cache)
            .field("server_addr", &self.server_addr)
            .finish()
    }
}

fn required(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingConfig(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
