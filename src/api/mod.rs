//! # API Module
//!
//! HTTP endpoints of the local server started by
//! [`crate::spotify::CallbackServer`].
//!
//! - [`callback`] - Receives the Spotify redirect and stores its `code` and
//!   `state` for the waiting authorization step.
//! - [`health`] - Returns status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use ctsync::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
