//! # API Module
//!
//! This module provides the HTTP endpoints served by the local callback
//! server during the implicit-grant login flow.
//!
//! ## Overview
//!
//! The implicit-grant flow delivers the access token as a URL *fragment*
//! appended to the redirect URI. Fragments are never sent to an HTTP server,
//! so the flow needs two endpoints working together:
//!
//! - [`landing`] - The page loaded at the redirect URI itself. A small
//!   script relays the fragment to `/callback` as a query string using
//!   `location.replace`, which also clears the token from the visible URL
//!   and browser history.
//! - [`callback`] - Receives the relayed fragment, resolves the token
//!   through the session manager (persisting it for later invocations) and
//!   hands it to the waiting auth command via shared state.
//!
//! ## Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! The module is built on the [Axum](https://docs.rs/axum) web framework;
//! each endpoint is an async handler wired into the router in
//! [`crate::server`]. Shared state between the callback handler and the
//! auth command is an `Arc<Mutex<Option<String>>>` cell holding the token
//! once it has arrived.
//!
//! ## Related Modules
//!
//! - [`crate::management`] - Session manager and token store
//! - [`crate::cli`] - The auth command that polls the shared state

mod callback;
mod health;

pub use callback::callback;
pub use callback::landing;
pub use health::health;
