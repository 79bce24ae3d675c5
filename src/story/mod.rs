//! Story card model and renderers.
//!
//! A story card is a fixed-layout vertical summary of a playlist: a colored
//! header block followed by one row per track (up to the display limit) with
//! album artwork, title, artist line and duration. The card model is plain
//! data; producing image bytes is behind the [`StoryRenderer`] port so the
//! output backend can be swapped without touching the pipeline.

mod card;
mod svg;

use thiserror::Error;

pub use card::DEFAULT_TRACK_LIMIT;
pub use card::StoryCard;
pub use card::StoryTrack;
pub use svg::SvgRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to process artwork: {0}")]
    Artwork(#[from] image::ImageError),

    #[error("failed to encode output: {0}")]
    Io(#[from] std::io::Error),
}

/// Render-to-image port.
///
/// Turns a finished [`StoryCard`] into image bytes the caller can write to
/// disk. Implementations choose the output format and report it through
/// [`StoryRenderer::file_extension`].
pub trait StoryRenderer {
    fn render(&self, card: &StoryCard) -> Result<Vec<u8>, RenderError>;
    fn file_extension(&self) -> &'static str;
}
