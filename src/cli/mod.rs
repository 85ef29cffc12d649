//! # CLI Module
//!
//! User-facing commands. Each command loads what it needs from the
//! configuration, runs the workflow and reports through the console macros.
//!
//! - [`auth`] - Fills the Spotify token cache
//! - [`songs`] - Lists the ChurchTools songs with their Spotify track ids
//! - [`sync`] - Logs into ChurchTools, fetches the songs and rewrites the playlist
//!
//! ```bash
//! ctsync auth --callback
//! ctsync songs --category Lobpreis
//! ctsync sync --playlist "Sunday Songs" --category Lobpreis
//! ```
//!
//! Errors are handled as follows:
//! - Missing configuration and rejected ChurchTools credentials end the
//!   program through [`crate::error!`]
//! - Everything that goes wrong while talking to Spotify is printed as a
//!   warning and the command returns

mod auth;
mod songs;
mod sync;

pub use auth::auth;
pub use songs::songs;
pub use sync::{create_spotify_playlist, login_and_fetch_songs, sync};
