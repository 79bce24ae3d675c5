use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use storify::story::{DEFAULT_TRACK_LIMIT, StoryCard, StoryRenderer, SvgRenderer};
use storify::types::{Album, AlbumArtist, Image, Playlist, Track, User};

fn test_user() -> User {
    User {
        id: "u1".to_string(),
        display_name: "Test Listener".to_string(),
        images: vec![Image {
            url: "https://img.example/avatar.jpg".to_string(),
            width: Some(64),
            height: Some(64),
        }],
    }
}

fn test_playlist() -> Playlist {
    Playlist {
        id: "p1".to_string(),
        name: "Morning Mix".to_string(),
    }
}

fn test_track(name: &str, duration_ms: u64, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        duration_ms,
        album: Album {
            name: format!("{} (album)", name),
            images: vec![],
            artists: vec![AlbumArtist {
                name: artist.to_string(),
            }],
        },
    }
}

fn tiny_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

#[test]
fn test_story_card_truncates_to_limit_in_order() {
    let tracks: Vec<Track> = (1..=15)
        .map(|i| test_track(&format!("Track {}", i), 60_000, "Artist"))
        .collect();

    let card = StoryCard::new(
        &test_user(),
        &test_playlist(),
        &tracks,
        DEFAULT_TRACK_LIMIT,
    );

    assert_eq!(card.tracks.len(), 10);
    assert_eq!(card.tracks[0].name, "Track 1");
    assert_eq!(card.tracks[9].name, "Track 10");

    // shorter listings are kept whole
    let short = StoryCard::new(
        &test_user(),
        &test_playlist(),
        &tracks[..3],
        DEFAULT_TRACK_LIMIT,
    );
    assert_eq!(short.tracks.len(), 3);
}

#[test]
fn test_story_card_formats_durations_and_artists() {
    let tracks = vec![
        test_track("One", 63_000, "First"),
        test_track("Two", 5_000, "Second"),
    ];

    let card = StoryCard::new(&test_user(), &test_playlist(), &tracks, 10);

    assert_eq!(card.tracks[0].duration, "1:03");
    assert_eq!(card.tracks[1].duration, "0:05");
    assert_eq!(card.tracks[0].artists, "First");
}

#[test]
fn test_attach_artwork_ignores_out_of_range() {
    let tracks = vec![test_track("One", 60_000, "A")];
    let mut card = StoryCard::new(&test_user(), &test_playlist(), &tracks, 10);

    card.attach_artwork(5, vec![1, 2, 3]);
    assert!(card.tracks[0].artwork.is_none());

    card.attach_artwork(0, vec![1, 2, 3]);
    assert!(card.tracks[0].artwork.is_some());
}

#[test]
fn test_svg_renderer_emits_card_content() {
    let tracks = vec![
        test_track("Rock & Roll", 63_000, "Band <X>"),
        test_track("Quiet Song", 5_000, "Solo"),
    ];
    let card = StoryCard::new(&test_user(), &test_playlist(), &tracks, 10);

    let renderer = SvgRenderer::new();
    let bytes = renderer.render(&card).unwrap();
    let svg = String::from_utf8(bytes).unwrap();

    // header block
    assert!(svg.contains("THIS WEEK"));
    assert!(svg.contains("what we&apos;re listening to"));

    // track rows with escaped names and formatted durations
    assert!(svg.contains("Rock &amp; Roll"));
    assert!(svg.contains("Band &lt;X&gt;"));
    assert!(svg.contains("1:03"));
    assert!(svg.contains("0:05"));

    // footer names the playlist and the user
    assert!(svg.contains("Morning Mix"));
    assert!(svg.contains("Test Listener"));

    // without artwork, rows fall back to placeholder circles
    assert!(svg.contains("<circle"));
    assert!(!svg.contains("data:image/png;base64,"));

    assert_eq!(renderer.file_extension(), "svg");
}

#[test]
fn test_svg_renderer_embeds_artwork_thumbnails() {
    let tracks = vec![test_track("One", 60_000, "A")];
    let mut card = StoryCard::new(&test_user(), &test_playlist(), &tracks, 10);
    card.attach_artwork(0, tiny_png());

    let renderer = SvgRenderer::new();
    let svg = String::from_utf8(renderer.render(&card).unwrap()).unwrap();

    assert!(svg.contains("data:image/png;base64,"));
    assert!(svg.contains("clip-path"));
}

#[test]
fn test_svg_renderer_rejects_invalid_artwork() {
    let tracks = vec![test_track("One", 60_000, "A")];
    let mut card = StoryCard::new(&test_user(), &test_playlist(), &tracks, 10);
    card.attach_artwork(0, vec![0, 1, 2, 3]);

    let renderer = SvgRenderer::new();
    assert!(renderer.render(&card).is_err());
}
