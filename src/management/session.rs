use crate::management::store::{StoreError, TokenStore};
use crate::utils;

/// Storage key for the persisted bearer token.
pub const TOKEN_KEY: &str = "token";

/// Owns the access token lifecycle: extraction from a redirect fragment,
/// restoration from the store, and removal on logout.
///
/// The token itself is an opaque string. There is no expiry or refresh
/// handling; a token is treated as valid until the remote service rejects it.
pub struct SessionManager<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolves the current session token.
    ///
    /// If a redirect fragment is supplied and carries an `access_token`
    /// parameter, that value is persisted under [`TOKEN_KEY`] and returned.
    /// Otherwise a previously persisted token is returned if one exists.
    /// `None` signals "unauthenticated" and is not an error; malformed
    /// fragments simply fall through to the store lookup.
    pub async fn resolve_token(&self, fragment: Option<&str>) -> Result<Option<String>, StoreError> {
        if let Some(fragment) = fragment {
            let params = utils::parse_fragment_params(fragment);
            if let Some(token) = params.get("access_token") {
                self.store.set(TOKEN_KEY, token).await?;
                return Ok(Some(token.clone()));
            }
        }

        self.store.get(TOKEN_KEY).await
    }

    /// Clears the persisted token.
    ///
    /// Side effect only: the caller is responsible for removing the
    /// credential from any live catalog client. The token is not revoked
    /// server-side.
    pub async fn logout(&self) -> Result<(), StoreError> {
        self.store.delete(TOKEN_KEY).await
    }
}
