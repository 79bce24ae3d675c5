use std::path::PathBuf;

use chrono::Utc;

use crate::{
    cli::{authenticated_client, report_api_error, spinner},
    error, info,
    management::ViewState,
    story::{StoryCard, StoryRenderer, SvgRenderer},
    success,
    types::Track,
    warning,
};

pub async fn story(playlist: String, output: Option<PathBuf>, limit: usize) {
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

    let mut card = StoryCard::new(&user, &selected, view.tracks(), limit);

    pb.set_message("Fetching album artwork...");
    let artwork_urls: Vec<Option<String>> = view
        .tracks()
        .iter()
        .take(limit)
        .map(smallest_artwork_url)
        .collect();

    for (index, url) in artwork_urls.iter().enumerate() {
        let Some(url) = url else { continue };
        match client.fetch_artwork(url).await {
            Ok(bytes) => card.attach_artwork(index, bytes),
            Err(e) => warning!("Failed to fetch artwork for track {}: {}", index + 1, e),
        }
    }
    pb.finish_and_clear();

    if card.tracks.len() < limit {
        info!(
            "Playlist {} has only {} tracks",
            selected.name,
            card.tracks.len()
        );
    }

    let renderer = SvgRenderer::new();
    let bytes = match renderer.render(&card) {
        Ok(bytes) => bytes,
        Err(e) => error!("Failed to render story card: {}", e),
    };

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "story-{date}.{ext}",
            date = Utc::now().format("%Y-%m-%d"),
            ext = renderer.file_extension()
        ))
    });

    if let Err(e) = async_fs::write(&path, bytes).await {
        error!("Failed to write {}: {}", path.display(), e);
    }

    success!("Story card written to {}", path.display());
}

/// Picks the smallest artwork of a track's album; Spotify orders the image
/// sequence from largest to smallest.
fn smallest_artwork_url(track: &Track) -> Option<String> {
    track.album.images.last().map(|image| image.url.clone())
}
