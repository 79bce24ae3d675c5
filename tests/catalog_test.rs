use axum::{
    Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::{Value, json};

use storify::management::ViewState;
use storify::spotify::{ApiError, CatalogClient};
use storify::story::StoryCard;

fn track_json(name: &str, duration_ms: u64, artist: &str) -> Value {
    json!({
        "track": {
            "name": name,
            "duration_ms": duration_ms,
            "album": {
                "name": format!("{} (album)", name),
                "images": [
                    {"url": "https://img.example/640.jpg", "width": 640, "height": 640},
                    {"url": "https://img.example/64.jpg", "width": 64, "height": 64}
                ],
                "artists": [{"name": artist}]
            }
        }
    })
}

async fn me(headers: HeaderMap) -> Response {
    if headers.get("authorization").is_none() {
        return (StatusCode::UNAUTHORIZED, "missing token").into_response();
    }

    Json(json!({
        "id": "u1",
        "display_name": "Test Listener",
        "images": [{"url": "https://img.example/avatar.jpg", "width": 64, "height": 64}]
    }))
    .into_response()
}

async fn playlists(Path(user_id): Path<String>) -> Response {
    match user_id.as_str() {
        "u1" => Json(json!({
            "items": [
                {"id": "p1", "name": "First Playlist"},
                {"id": "p2", "name": "Second Playlist"}
            ]
        }))
        .into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
    }
}

async fn tracks(Path(playlist_id): Path<String>) -> Response {
    match playlist_id.as_str() {
        // more tracks than the card limit, to exercise truncation
        "p1" => {
            let items: Vec<Value> = (1u64..=12)
                .map(|i| track_json(&format!("Track {}", i), 60_000 + i * 1_000, "Artist One"))
                .collect();
            Json(json!({ "items": items })).into_response()
        }
        "p2" => Json(json!({
            "items": [
                track_json("Other A", 5_000, "Artist Two"),
                track_json("Other B", 63_000, "Artist Two")
            ]
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "no such playlist").into_response(),
    }
}

async fn spawn_fixture_server() -> String {
    let app = Router::new()
        .route("/me", get(me))
        .route("/users/{id}/playlists", get(playlists))
        .route("/playlists/{id}/tracks", get(tracks));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn authenticated_client(base_url: &str) -> CatalogClient {
    let mut client = CatalogClient::with_base_url(base_url);
    client.apply_credential(Some("fixture-token".to_string()));
    client
}

#[tokio::test]
async fn test_fetch_current_user() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);

    let user = client.fetch_current_user().await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.display_name, "Test Listener");
    assert_eq!(user.images.len(), 1);
}

#[tokio::test]
async fn test_missing_credential_surfaces_as_auth_error() {
    let base = spawn_fixture_server().await;
    let client = CatalogClient::with_base_url(base.as_str());

    let err = client.fetch_current_user().await.unwrap_err();

    match err {
        ApiError::Auth { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "missing token");
        }
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remote_failure_carries_status_and_body() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);

    let err = client.fetch_user_playlists("unknown").await.unwrap_err();

    match err {
        ApiError::Remote { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_network_error() {
    // nothing listens here
    let client = CatalogClient::with_base_url("http://127.0.0.1:9");

    let err = client.fetch_current_user().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_fetch_user_playlists_preserves_order() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);

    let playlists = client.fetch_user_playlists("u1").await.unwrap();

    let ids: Vec<&str> = playlists.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[tokio::test]
async fn test_fetch_playlist_tracks_unwraps_items_in_order() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);

    let tracks = client.fetch_playlist_tracks("p2").await.unwrap();

    // item envelopes are projected down to the inner track, order kept
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Other A");
    assert_eq!(tracks[1].name, "Other B");
    assert_eq!(tracks[1].album.artists[0].name, "Artist Two");
}

#[tokio::test]
async fn test_end_to_end_story_selection() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);
    let mut view = ViewState::new();

    // user first, then playlists, then the selected playlist's tracks
    let user = client.fetch_current_user().await.unwrap();
    view.set_user(user.clone());

    let playlists = client.fetch_user_playlists(&user.id).await.unwrap();
    view.set_playlists(playlists);

    let selected = view.find_playlist("First Playlist").cloned().unwrap();
    assert_eq!(selected.id, "p1");

    let tracks = client.fetch_playlist_tracks(&selected.id).await.unwrap();
    view.set_tracks(tracks);
    assert_eq!(view.tracks().len(), 12);

    // the renderer receives the first 10 tracks in fetch order
    let card = StoryCard::new(&user, &selected, view.tracks(), 10);
    assert_eq!(card.tracks.len(), 10);
    assert_eq!(card.tracks[0].name, "Track 1");
    assert_eq!(card.tracks[9].name, "Track 10");
}

#[tokio::test]
async fn test_overlapping_selections_are_last_write_wins() {
    let base = spawn_fixture_server().await;
    let client = authenticated_client(&base);
    let mut view = ViewState::new();

    let first = client.fetch_playlist_tracks("p1").await.unwrap();
    let second = client.fetch_playlist_tracks("p2").await.unwrap();

    // responses apply in arrival order; the later one replaces wholesale
    view.set_tracks(first);
    view.set_tracks(second);

    assert_eq!(view.tracks().len(), 2);
    assert_eq!(view.tracks()[0].name, "Other A");
}
