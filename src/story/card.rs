use crate::types::{Playlist, Track, User};
use crate::utils;

/// Number of tracks a story card shows.
pub const DEFAULT_TRACK_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct StoryTrack {
    pub name: String,
    pub artists: String,
    pub duration: String,
    pub artwork: Option<Vec<u8>>,
}

/// Display model of a story card.
///
/// Built from the fetched user, the selected playlist and its track listing,
/// truncated to the first `limit` tracks in fetch order. Artwork bytes are
/// attached separately once downloaded.
#[derive(Debug, Clone)]
pub struct StoryCard {
    pub heading: String,
    pub title: String,
    pub user_name: String,
    pub playlist_name: String,
    pub tracks: Vec<StoryTrack>,
}

impl StoryCard {
    pub fn new(user: &User, playlist: &Playlist, tracks: &[Track], limit: usize) -> Self {
        let tracks = tracks
            .iter()
            .take(limit)
            .map(|t| StoryTrack {
                name: t.name.clone(),
                artists: utils::join_artist_names(&t.album.artists),
                duration: utils::format_duration(t.duration_ms),
                artwork: None,
            })
            .collect();

        Self {
            heading: "THIS WEEK".to_string(),
            title: "what we're listening to".to_string(),
            user_name: user.display_name.clone(),
            playlist_name: playlist.name.clone(),
            tracks,
        }
    }

    /// Attaches downloaded artwork bytes to the track at `index`. Out-of-range
    /// indices are ignored.
    pub fn attach_artwork(&mut self, index: usize, bytes: Vec<u8>) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.artwork = Some(bytes);
        }
    }
}
