use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to ChurchTools or Spotify.
#[derive(Error, Debug)]
pub enum Error {
    /// ChurchTools rejected the login or returned no person id.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Network failure or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// A required environment variable is not set.
    #[error("Missing configuration value: {0} must be set")]
    MissingConfig(&'static str),

    /// The token cache could not be read, parsed or written.
    #[error("Token cache error: {0}")]
    TokenCache(String),

    /// No song carried a usable Spotify link.
    #[error("No valid Spotify links were found in the provided song list")]
    NoTrackIds,
}

impl Error {
    /// Builds an [`Error::Api`] from a failed response, keeping its body as message.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
        Error::Api { status, message }
    }
}
