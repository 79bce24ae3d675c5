use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{config, error, server::start_api_server, success, warning};

/// Runs the implicit-grant login flow.
///
/// Starts the local callback server, opens the authorize URL in the user's
/// browser and waits for the redirect to deliver the access token. The
/// callback handler persists the token; this function only reports the
/// outcome.
///
/// The authorize entry point is parameterized by the client identifier, the
/// redirect URI and the fixed response type `token` - the token comes back
/// directly in the redirect URL fragment, with no code exchange.
pub async fn auth(shared_state: Arc<Mutex<Option<String>>>) {
    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&redirect_uri={redirect_uri}&response_type=token",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
    );

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for the redirect to be relayed
    let token = wait_for_token(shared_state).await;

    match token {
        Some(_) => success!("Authentication successful!"),
        None => error!("Authentication failed or timed out."),
    }
}

/// Polls the shared state for the relayed token with a 60-second timeout.
///
/// Runs concurrently with the callback handler that fills the cell after a
/// successful redirect.
async fn wait_for_token(shared_state: Arc<Mutex<Option<String>>>) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref() {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
