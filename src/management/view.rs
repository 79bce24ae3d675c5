use crate::types::{Playlist, Track, User};

/// Transient query results for the current invocation.
///
/// Holds the fetched user, their playlist collection and the selected
/// playlist's tracks. Setting the track list replaces it wholesale, so when
/// two fetches overlap the later arrival wins.
#[derive(Debug, Default)]
pub struct ViewState {
    user: Option<User>,
    playlists: Vec<Playlist>,
    tracks: Vec<Track>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn find_playlist(&self, selector: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|p| p.id == selector || p.name == selector)
    }

    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
