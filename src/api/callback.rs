use std::sync::Arc;

use axum::{Extension, extract::RawQuery, response::Html};
use tokio::sync::Mutex;

use crate::{
    management::{FileStore, SessionManager},
    warning,
};

/// Page served at the redirect URI itself.
///
/// The access token arrives as a URL fragment, which the browser never sends
/// to the server. This page relays the fragment to `/callback` as a query
/// string; `location.replace` keeps the token out of the visible URL and the
/// browser history.
pub async fn landing() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\
         <html><body><p>Completing login&hellip;</p>\
         <script>\
           var fragment = window.location.hash;\
           if (fragment) {\
             window.location.replace('/callback?' + fragment.substring(1));\
           } else {\
             document.body.innerHTML = '<h4>No access token in redirect.</h4>';\
           }\
         </script>\
         </body></html>",
    )
}

pub async fn callback(
    RawQuery(query): RawQuery,
    Extension(shared_state): Extension<Arc<Mutex<Option<String>>>>,
) -> Html<&'static str> {
    // the relayed query string is the original redirect fragment, verbatim
    let fragment = query.unwrap_or_default();

    let session = SessionManager::new(FileStore::new());
    match session.resolve_token(Some(&fragment)).await {
        Ok(Some(token)) => {
            let mut state = shared_state.lock().await;
            *state = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Ok(None) => Html("<h4>Missing access token.</h4>"),
        Err(e) => {
            warning!("Failed to persist token: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
