use storify::management::{FileStore, MemoryStore, SessionManager, TOKEN_KEY, TokenStore};
use storify::spotify::CatalogClient;

fn scratch_store(test_name: &str) -> FileStore {
    let root = std::env::temp_dir().join(format!("storify-test-{}-{}", std::process::id(), test_name));
    FileStore::with_root(root)
}

#[tokio::test]
async fn test_resolve_token_extracts_and_persists_from_fragment() {
    let store = MemoryStore::new();
    let session = SessionManager::new(store);

    let token = session
        .resolve_token(Some("#access_token=t&other=x"))
        .await
        .unwrap();
    assert_eq!(token, Some("t".to_string()));

    // A later call without a fragment restores the persisted value
    let restored = session.resolve_token(None).await.unwrap();
    assert_eq!(restored, Some("t".to_string()));
}

#[tokio::test]
async fn test_resolve_token_without_fragment_or_store_is_absent() {
    let session = SessionManager::new(MemoryStore::new());

    let token = session.resolve_token(None).await.unwrap();
    assert_eq!(token, None);
}

#[tokio::test]
async fn test_resolve_token_malformed_fragment_falls_through() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "stored").await.unwrap();
    let session = SessionManager::new(store);

    // No access_token in the fragment: not an error, the store wins
    let token = session.resolve_token(Some("#foo=bar&&&")).await.unwrap();
    assert_eq!(token, Some("stored".to_string()));

    // And with nothing stored either, absence
    let empty_session = SessionManager::new(MemoryStore::new());
    let token = empty_session.resolve_token(Some("#foo=bar")).await.unwrap();
    assert_eq!(token, None);
}

#[tokio::test]
async fn test_fresh_fragment_replaces_stored_token() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "old").await.unwrap();
    let session = SessionManager::new(store);

    let token = session
        .resolve_token(Some("#access_token=new"))
        .await
        .unwrap();
    assert_eq!(token, Some("new".to_string()));

    let restored = session.resolve_token(None).await.unwrap();
    assert_eq!(restored, Some("new".to_string()));
}

#[tokio::test]
async fn test_logout_clears_persisted_token() {
    let store = MemoryStore::new();
    let session = SessionManager::new(store);

    session
        .resolve_token(Some("#access_token=t"))
        .await
        .unwrap();
    session.logout().await.unwrap();

    let token = session.resolve_token(None).await.unwrap();
    assert_eq!(token, None);
}

#[tokio::test]
async fn test_file_store_roundtrip() {
    let store = scratch_store("roundtrip");

    // missing entries read as absence
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);

    store.set(TOKEN_KEY, "t").await.unwrap();
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), Some("t".to_string()));

    // deletion is idempotent
    store.delete(TOKEN_KEY).await.unwrap();
    store.delete(TOKEN_KEY).await.unwrap();
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_session_over_file_store() {
    let session = SessionManager::new(scratch_store("session"));

    let token = session
        .resolve_token(Some("#access_token=persisted"))
        .await
        .unwrap();
    assert_eq!(token, Some("persisted".to_string()));

    // a fresh manager over the same root sees the persisted token
    let restored = SessionManager::new(scratch_store("session"))
        .resolve_token(None)
        .await
        .unwrap();
    assert_eq!(restored, Some("persisted".to_string()));

    session.logout().await.unwrap();
}

#[test]
fn test_apply_credential_installs_and_removes() {
    let mut client = CatalogClient::with_base_url("http://127.0.0.1:9");

    assert!(!client.has_credential());

    client.apply_credential(Some("t".to_string()));
    assert!(client.has_credential());

    // None removes the installed credential
    client.apply_credential(None);
    assert!(!client.has_credential());

    // An empty token counts as absence
    client.apply_credential(Some(String::new()));
    assert!(!client.has_credential());
}
