//! # CLI Module
//!
//! This module provides the command-line interface layer for Storify, a
//! Spotify API client that renders shareable story cards from playlists. It
//! implements all user-facing commands and coordinates between the session
//! manager, the catalog client and the story renderer.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the implicit-grant login flow: starts the local
//!   callback server, opens the authorize URL in the browser and waits for
//!   the redirect to deliver the access token
//! - [`logout`] - Clears the persisted token and the installed credential
//!
//! ### Catalog Queries
//!
//! - [`playlists`] - Lists the authenticated user's playlists
//! - [`tracks`] - Lists the tracks of a selected playlist
//!
//! ### Story Rendering
//!
//! - [`story`] - Fetches the selected playlist's tracks and renders the
//!   story card to an image file
//!
//! ## Data Flow
//!
//! Every catalog command follows the same sequence: restore the token from
//! the store, install it on the catalog client, fetch the current user,
//! then the user's playlists, then (where applicable) the selected
//! playlist's tracks. The fetches are sequential; failures are reported
//! per kind through the status macros and terminate the command, leaving
//! any already-printed output as-is.
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::management`] - Session manager, token store and view state
//! - [`crate::spotify`] - Catalog client
//! - [`crate::story`] - Card model and renderers
//! - [`crate::server`] - Local callback server used by [`auth`]

mod auth;
mod logout;
mod playlists;
mod story;
mod tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::auth;
pub use logout::logout;
pub use playlists::playlists;
pub use story::story;
pub use tracks::tracks;

use crate::{
    error,
    management::{FileStore, SessionManager},
    spotify::{ApiError, CatalogClient},
};

/// Restores the stored session token and returns a catalog client with the
/// credential installed. Exits with a hint to run `storify auth` when no
/// token is available.
pub(crate) async fn authenticated_client() -> CatalogClient {
    let session = SessionManager::new(FileStore::new());
    let token = match session.resolve_token(None).await {
        Ok(token) => token,
        Err(e) => error!("Failed to read stored token: {}", e),
    };

    match token {
        Some(token) => {
            let mut client = CatalogClient::new();
            client.apply_credential(Some(token));
            client
        }
        None => error!("Not authenticated. Please run storify auth"),
    }
}

/// Reports a catalog failure and exits, keeping the three error kinds
/// distinguishable in the output.
pub(crate) fn report_api_error(context: &str, err: ApiError) -> ! {
    match err {
        ApiError::Auth { status, .. } => {
            error!(
                "{}: authorization rejected ({}). Please run storify auth",
                context, status
            )
        }
        ApiError::Network(e) => error!("{}: network failure: {}", context, e),
        ApiError::Remote { status, body } => {
            error!("{}: remote error {}: {}", context, status, body)
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
