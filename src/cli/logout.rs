use crate::{
    error,
    management::{FileStore, SessionManager},
    spotify::CatalogClient,
    success,
};

/// Clears the persisted token and removes the installed credential.
///
/// Side effect only: the token is not revoked server-side.
pub async fn logout() {
    let session = SessionManager::new(FileStore::new());
    let mut client = CatalogClient::new();

    if let Err(e) = session.logout().await {
        error!("Failed to clear stored token: {}", e);
    }

    client.apply_credential(None);
    success!("Logged out.");
}
