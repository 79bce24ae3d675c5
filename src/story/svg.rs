use std::fmt::Write as _;
use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};
use image::ImageFormat;

use crate::story::{RenderError, StoryCard, StoryRenderer};

const CARD_WIDTH: u32 = 400;
const HEADER_HEIGHT: u32 = 132;
const ROW_HEIGHT: u32 = 64;
const FOOTER_HEIGHT: u32 = 40;
const MARGIN: u32 = 16;
const ART_SIZE: u32 = 48;
// thumbnails are rasterized at 2x the display size
const THUMB_RASTER_SIZE: u32 = 96;

const CARD_BG: &str = "#FFFFFF";
const HEADER_BG: &str = "#1E7ECC";
const ACCENT: &str = "#DDB834";
const TEXT_PRIMARY: &str = "#1A1A1A";
const TEXT_SECONDARY: &str = "#555555";
const ART_PLACEHOLDER: &str = "#E0E0E0";
const FONT_STACK: &str = "Helvetica, Arial, sans-serif";

/// Renders a story card as an SVG document.
///
/// The layout mirrors the on-screen card: a colored header with the heading
/// and title, one row per track with a circular album thumbnail, and a footer
/// naming the playlist and user. Artwork bytes are decoded, thumbnailed and
/// embedded as PNG data URIs so the output is a single self-contained file.
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    fn artwork_data_uri(bytes: &[u8]) -> Result<String, RenderError> {
        let art = image::load_from_memory(bytes)?;
        let thumb = art.thumbnail(THUMB_RASTER_SIZE, THUMB_RASTER_SIZE);

        let mut encoded = Cursor::new(Vec::new());
        thumb.write_to(&mut encoded, ImageFormat::Png)?;

        Ok(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(encoded.get_ref())
        ))
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryRenderer for SvgRenderer {
    fn render(&self, card: &StoryCard) -> Result<Vec<u8>, RenderError> {
        let rows = card.tracks.len() as u32;
        let height = HEADER_HEIGHT + MARGIN + rows * ROW_HEIGHT + FOOTER_HEIGHT;

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"{font}\">",
            w = CARD_WIDTH,
            h = height,
            font = FONT_STACK
        );

        // card background and header block
        let _ = write!(
            svg,
            "<rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\
             <rect width=\"{w}\" height=\"{hh}\" fill=\"{header}\"/>\
             <text x=\"{m}\" y=\"72\" fill=\"{accent}\" font-size=\"16\">{heading}</text>\
             <text x=\"{m}\" y=\"104\" fill=\"{bg}\" font-size=\"22\" font-weight=\"600\" \
             font-family=\"serif\">{title}</text>",
            w = CARD_WIDTH,
            h = height,
            hh = HEADER_HEIGHT,
            m = MARGIN,
            bg = CARD_BG,
            header = HEADER_BG,
            accent = ACCENT,
            heading = xml_escape(&card.heading),
            title = xml_escape(&card.title)
        );

        for (i, track) in card.tracks.iter().enumerate() {
            let row_top = HEADER_HEIGHT + MARGIN + i as u32 * ROW_HEIGHT;
            let art_cx = MARGIN + ART_SIZE / 2;
            let art_cy = row_top + ROW_HEIGHT / 2;
            let text_x = MARGIN + ART_SIZE + MARGIN;
            let text_mid = row_top + ROW_HEIGHT / 2;

            match &track.artwork {
                Some(bytes) => {
                    let href = Self::artwork_data_uri(bytes)?;
                    let _ = write!(
                        svg,
                        "<clipPath id=\"art{i}\"><circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"/></clipPath>\
                         <image x=\"{x}\" y=\"{y}\" width=\"{s}\" height=\"{s}\" \
                         clip-path=\"url(#art{i})\" href=\"{href}\"/>",
                        i = i,
                        cx = art_cx,
                        cy = art_cy,
                        r = ART_SIZE / 2,
                        x = MARGIN,
                        y = art_cy - ART_SIZE / 2,
                        s = ART_SIZE,
                        href = href
                    );
                }
                None => {
                    let _ = write!(
                        svg,
                        "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"/>",
                        cx = art_cx,
                        cy = art_cy,
                        r = ART_SIZE / 2,
                        fill = ART_PLACEHOLDER
                    );
                }
            }

            let _ = write!(
                svg,
                "<text x=\"{tx}\" y=\"{ty1}\" fill=\"{primary}\" font-size=\"16\" \
                 font-weight=\"600\">{name}</text>\
                 <text x=\"{tx}\" y=\"{ty2}\" fill=\"{secondary}\" font-size=\"12\">{artists}</text>\
                 <text x=\"{dx}\" y=\"{dy}\" fill=\"{primary}\" font-size=\"14\" \
                 text-anchor=\"end\">{duration}</text>",
                tx = text_x,
                ty1 = text_mid - 4,
                ty2 = text_mid + 14,
                primary = TEXT_PRIMARY,
                secondary = TEXT_SECONDARY,
                name = xml_escape(&track.name),
                artists = xml_escape(&track.artists),
                dx = CARD_WIDTH - MARGIN,
                dy = text_mid + 5,
                duration = xml_escape(&track.duration)
            );
        }

        let _ = write!(
            svg,
            "<text x=\"{m}\" y=\"{fy}\" fill=\"{secondary}\" font-size=\"12\">{playlist} &#183; {user}</text></svg>",
            m = MARGIN,
            fy = height - MARGIN,
            secondary = TEXT_SECONDARY,
            playlist = xml_escape(&card.playlist_name),
            user = xml_escape(&card.user_name)
        );

        Ok(svg.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "svg"
    }
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
