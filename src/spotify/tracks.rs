use crate::spotify::{ApiError, CatalogClient};
use crate::types::{PlaylistTracksResponse, Track};

impl CatalogClient {
    /// Retrieves the track listing of a playlist from the Spotify Web API.
    ///
    /// Issues an authenticated GET against the `playlists/{id}/tracks`
    /// resource. The response wraps every entry as `{"track": {...}}`; this
    /// operation projects each wrapper down to the inner track, preserving
    /// the playlist order.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Spotify id of the playlist to list
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Track>)` - Tracks in playlist order, unwrapped from their
    ///   item envelopes
    /// - `Err(ApiError)` - Authorization rejection, transport failure, or
    ///   other remote error
    ///
    /// # Freshness
    ///
    /// Tracks are fetched fresh on every selection. Callers replace any
    /// previously held track list with the result; there is no
    /// multi-playlist cache.
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = client.fetch_playlist_tracks(&playlist.id).await?;
    /// for track in tracks.iter().take(10) {
    ///     println!("{} ({})", track.name, format_duration(track.duration_ms));
    /// }
    /// ```
    pub async fn fetch_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        let response: PlaylistTracksResponse = self
            .get_json(&format!("playlists/{}/tracks", playlist_id))
            .await?;

        Ok(response.items.into_iter().map(|item| item.track).collect())
    }
}
