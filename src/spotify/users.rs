use crate::spotify::{ApiError, CatalogClient};
use crate::types::User;

impl CatalogClient {
    /// Retrieves the profile of the authenticated user from the Spotify Web API.
    ///
    /// Issues an authenticated GET against the `me` resource. This is the
    /// first call of every session: the returned user id drives the
    /// subsequent playlist fetch, and the display name and profile images
    /// feed the story card header.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(User)` - Profile with id, display name and profile images
    /// - `Err(ApiError)` - Authorization rejection, transport failure, or
    ///   other remote error
    ///
    /// # Authentication
    ///
    /// Requires an installed credential. A missing or expired token is not
    /// detected locally; the remote rejection surfaces as
    /// [`ApiError::Auth`] with the response status and body attached.
    ///
    /// # Example
    ///
    /// ```
    /// let mut client = CatalogClient::new();
    /// client.apply_credential(Some(token));
    /// let user = client.fetch_current_user().await?;
    /// println!("Authenticated as {}", user.display_name);
    /// ```
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.get_json("me").await
    }
}
