//! # Spotify Integration Module
//!
//! Everything needed to write a track list into a Spotify playlist.
//!
//! ```text
//! cli::sync
//!     ↓
//! auth (token cache, authorization code flow)
//!     ↓
//! client (Web API over reqwest) ── implements ── playlist::PlaylistService
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Authorization code flow with client secret: authorize URL,
//!   redirect parsing, code exchange, refresh and the cached-token lookup.
//! - [`code_source`] - Ways to obtain the redirect after the user granted
//!   access: stdin prompt, local callback server or a code given upfront.
//! - [`client`] - Thin Web API client bound to one access token.
//! - [`playlist`] - Playlist resolution and the clear-then-add sync, written
//!   against the [`playlist::PlaylistService`] trait.
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id
//! - `GET /me/playlists` - User's playlists, all pages
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `PUT /playlists/{playlist_id}/tracks` - Replace (clear) items
//! - `POST /playlists/{playlist_id}/tracks` - Add up to 100 items
//! - `POST /api/token` - Code exchange and refresh
//!
//! None of the calls are retried.

pub mod auth;
pub mod client;
pub mod code_source;
pub mod playlist;

pub use client::SpotifyClient;
pub use code_source::{AuthorizationCodeSource, CallbackServer, ProvidedCode, StdinPrompt};
pub use playlist::{PlaylistService, find_or_create_playlist, sync_playlist};
