use std::collections::HashMap;

use crate::types::AlbumArtist;

/// Parses the parameter pairs of a redirect URL fragment.
///
/// The implicit-grant flow delivers the access token as
/// `#access_token=<token>&token_type=Bearer&...` appended to the redirect
/// URI. This helper turns such a fragment (with or without the leading `#`)
/// into a key/value map. Values are percent-decoded.
///
/// The parser is total: malformed input never fails, it just yields fewer
/// pairs. An absent key signals "no token" to the caller, not an error.
pub fn parse_fragment_params(fragment: &str) -> HashMap<String, String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    url::form_urlencoded::parse(fragment.as_bytes())
        .into_owned()
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// Formats a track duration in milliseconds as `M:SS`.
///
/// Seconds are zero-padded, minutes are not: 63000 becomes `1:03`,
/// 5000 becomes `0:05`, 600000 becomes `10:00`.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

pub fn join_artist_names(artists: &[AlbumArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
