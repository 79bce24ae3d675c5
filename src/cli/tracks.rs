use tabled::Table;

use crate::{
    cli::{authenticated_client, report_api_error, spinner},
    error,
    management::ViewState,
    types::TrackTableRow,
    utils,
};

pub async fn tracks(playlist: String) {
    let client = authenticated_client().await;
    let mut view = ViewState::new();

    let pb = spinner("Fetching profile...");
    let user = match client.fetch_current_user().await {
        Ok(user) => user,
        Err(e) => {
            pb.finish_and_clear();
            report_api_error("Failed to fetch profile", e);
        }
    };
    view.set_user(user.clone());

    pb.set_message("Fetching playlists...");
    match client.fetch_user_playlists(&user.id).await {
        Ok(playlists) => view.set_playlists(playlists),
        Err(e) => {
            pb.finish_and_clear();
            report_api_error("Failed to fetch playlists", e);
        }
    }

    let Some(selected) = view.find_playlist(&playlist).cloned() else {
        pb.finish_and_clear();
        error!("No playlist with id or name {}", playlist);
    };

    pb.set_message(format!("Fetching tracks of {}...", selected.name));
    match client.fetch_playlist_tracks(&selected.id).await {
        Ok(tracks) => view.set_tracks(tracks),
        Err(e) => {
            pb.finish_and_clear();
            report_api_error("Failed to fetch tracks", e);
        }
    }
    pb.finish_and_clear();

    let table_rows: Vec<TrackTableRow> = view
        .tracks()
        .iter()
        .map(|t| TrackTableRow {
            title: t.name.clone(),
            artists: utils::join_artist_names(&t.album.artists),
            album: t.album.name.clone(),
            length: utils::format_duration(t.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
