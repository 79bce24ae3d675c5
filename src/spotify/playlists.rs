use crate::spotify::{ApiError, CatalogClient};
use crate::types::{Playlist, UserPlaylistsResponse};

impl CatalogClient {
    /// Retrieves the playlists of a user from the Spotify Web API.
    ///
    /// Issues an authenticated GET against the `users/{id}/playlists`
    /// resource and unwraps the `items` envelope. The returned order is the
    /// API's order and is preserved; selecting a playlist later does not
    /// mutate this collection.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify id of the user whose playlists to list, as
    ///   returned by [`CatalogClient::fetch_current_user`]
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Playlist>)` - Ordered playlist collection
    /// - `Err(ApiError)` - Authorization rejection, transport failure, or
    ///   other remote error
    ///
    /// # Sequencing
    ///
    /// Callers fetch the current user first and pass its id here; the two
    /// calls are sequential by design, never concurrent.
    ///
    /// # Example
    ///
    /// ```
    /// let user = client.fetch_current_user().await?;
    /// let playlists = client.fetch_user_playlists(&user.id).await?;
    /// println!("Found {} playlists", playlists.len());
    /// ```
    pub async fn fetch_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, ApiError> {
        let response: UserPlaylistsResponse =
            self.get_json(&format!("users/{}/playlists", user_id)).await?;

        Ok(response.items)
    }
}
