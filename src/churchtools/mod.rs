//! # ChurchTools Module
//!
//! Access to the song database of a ChurchTools instance.
//!
//! - [`session`] - Login with email and password, yielding a [`ChurchToolsSession`]
//! - [`songs`] - Paginated song listing and the [`get_all_songs`] loop
//!
//! The session is a plain value. All further requests are free functions or
//! trait methods taking the session by reference, so nothing depends on
//! hidden client state besides the session cookie set during login.

pub mod session;
pub mod songs;

pub use session::ChurchToolsSession;
pub use songs::{SongSource, get_all_songs};
