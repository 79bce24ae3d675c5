use tabled::Table;

use crate::{
    cli::{authenticated_client, report_api_error, spinner},
    types::PlaylistTableRow,
};

pub async fn playlists() {
    let client = authenticated_client().await;

    let pb = spinner("Fetching profile...");
    let user = match client.fetch_current_user().await {
        Ok(user) => user,
        Err(e) => {
            pb.finish_and_clear();
            report_api_error("Failed to fetch profile", e);
        }
    };

    pb.set_message(format!("Fetching playlists for {}...", user.display_name));
    let playlists = match client.fetch_user_playlists(&user.id).await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            report_api_error("Failed to fetch playlists", e);
        }
    };
    pb.finish_and_clear();

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
