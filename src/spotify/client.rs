use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;

/// Failure kinds surfaced by catalog operations.
///
/// `Auth` and `Remote` carry the remote status and response body so callers
/// can report the rejection instead of a generic failure; `Network` wraps
/// transport errors where no response was received.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authorization rejected ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("remote returned {status}: {body}")]
    Remote { status: StatusCode, body: String },
}

/// Authenticated read client for the Spotify Web API.
///
/// Holds its own credential field; installing or removing the credential
/// affects all subsequent requests issued through this instance and nothing
/// else.
pub struct CatalogClient {
    http: Client,
    base_url: String,
    credential: Option<String>,
}

impl CatalogClient {
    /// Creates a client against the configured API base URL with no
    /// credential installed.
    pub fn new() -> Self {
        Self::with_base_url(config::spotify_apiurl())
    }

    /// Creates a client against an explicit base URL. Used by tests to point
    /// at a local fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            credential: None,
        }
    }

    /// Installs `token` as the bearer credential for all subsequent requests,
    /// or removes the credential when `None` is given.
    pub fn apply_credential(&mut self, token: Option<String>) {
        self.credential = match token {
            Some(t) if !t.is_empty() => Some(t),
            _ => None,
        };
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Issues an authenticated GET against `path` relative to the API base
    /// and parses the JSON body.
    ///
    /// On a non-2xx response the status and body are re-signaled through
    /// [`ApiError`] rather than swallowed; an authorization rejection (401 or
    /// 403) is distinguished from other remote failures.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let api_url = format!(
            "{base}/{path}",
            base = self.base_url.trim_end_matches('/'),
            path = path
        );

        let mut request = self.http.get(&api_url);
        if let Some(token) = &self.credential {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(ApiError::Auth { status, body });
            }
            return Err(ApiError::Remote { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetches raw bytes from an absolute URL, e.g. album artwork referenced
    /// by a track listing. Artwork URLs are served from Spotify's CDN and
    /// need no credential.
    pub async fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Remote { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
