//! # Spotify Integration Module
//!
//! This module provides the catalog-facing interface to the Spotify Web API.
//! It implements the authenticated read operations the story pipeline needs
//! and serves as the only place in the application that issues remote HTTP
//! requests.
//!
//! ## Overview
//!
//! The module is built around [`CatalogClient`], an explicit client object
//! that owns the HTTP connection pool, the API base URL and the currently
//! installed bearer credential. Keeping the credential on the client (rather
//! than in process-wide default headers) removes hidden coupling and makes
//! the credential swap testable in isolation.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Catalog Client
//!     ├── Current User  (users)
//!     ├── Playlists     (playlists)
//!     └── Tracks        (tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Profile of the authenticated user
//! - `GET /users/{id}/playlists` - The user's playlists
//! - `GET /playlists/{id}/tracks` - Track listing of a playlist
//!
//! Album artwork referenced by the track listing is fetched by absolute URL
//! through the same client for the story renderer.
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`], which distinguishes the three
//! failure kinds the application cares about:
//!
//! - [`ApiError::Auth`] - the remote rejected the credential (missing,
//!   expired or invalid token)
//! - [`ApiError::Network`] - transport-level failure, no usable response
//! - [`ApiError::Remote`] - any other non-2xx structured response
//!
//! The shared request helper attaches the remote status and body instead of
//! swallowing them; callers decide how failures are surfaced.
//!
//! ## Concurrency
//!
//! All operations are async and issued sequentially by the callers: the
//! current user is fetched before the playlists, and a track fetch is
//! triggered per selection. There is no retry, timeout or cancellation
//! logic; tokens are never refreshed (an expired token surfaces as
//! [`ApiError::Auth`] and the user re-authenticates).

mod client;
mod playlists;
mod tracks;
mod users;

pub use client::ApiError;
pub use client::CatalogClient;
