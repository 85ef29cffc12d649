//! ChurchTools to Spotify playlist sync
//!
//! This library logs into a ChurchTools instance, pages through its song
//! database and writes the Spotify tracks linked from the song arrangements
//! into a Spotify playlist. The playlist is always cleared before the tracks
//! are added again.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `churchtools` - ChurchTools session and song listing
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration values loaded from the environment
//! - `error` - Error type shared by all modules
//! - `management` - On-disk token cache
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client and authorization
//! - `types` - Data structures and type definitions
//! - `utils` - Link extraction and other helpers

pub mod api;
pub mod churchtools;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the outer edges of the application where any error is simply
/// reported to the user. Library functions return [`Result`] with the typed
/// [`Error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Result type used by the library modules.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching songs from {}", base_url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist '{}' updated", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the program cannot continue from, such as missing
/// configuration or rejected ChurchTools credentials.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for every recoverable failure: a song without a Spotify link, a
/// rejected batch, or an aborted sync.
///
/// # Example
///
/// ```
/// warning!("No Spotify link found for the song '{}'.", song.name);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
