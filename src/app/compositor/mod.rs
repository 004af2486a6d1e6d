//! Artifact compositor: decode the background, lay out the card as draw
//! commands, rasterize them and encode a PNG.

pub mod draw;
pub mod fonts;
pub mod layout;
pub mod raster;
pub mod wrap;

use std::sync::Arc;

use image::RgbaImage;

use crate::domain::{ARTIFACT_HEIGHT, ARTIFACT_WIDTH, AppError, ArtifactRequest};
use crate::ports::ArtifactRenderer;

pub use draw::{DrawCommand, DrawList, Fill, FontSpec, Shadow, TextAlign, TextBaseline, TextMeasure};
pub use fonts::FontBook;
pub use raster::PixmapSurface;

/// Decode PNG/JPEG/WebP bytes into RGBA pixels.
pub fn decode_background(bytes: &[u8]) -> Result<Arc<RgbaImage>, AppError> {
    let image = image::load_from_memory(bytes).map_err(|e| AppError::ImageDecode(e.to_string()))?;
    Ok(Arc::new(image.to_rgba8()))
}

/// Renders vision cards with fonts from a `FontBook`.
pub struct Compositor {
    fonts: FontBook,
}

impl Compositor {
    pub fn new(fonts: FontBook) -> Self {
        Self { fonts }
    }

    /// The draw command list for `request`, without rasterizing it.
    pub fn compose(&self, request: &ArtifactRequest) -> Result<Vec<DrawCommand>, AppError> {
        let background = decode_background(&request.background)?;
        layout::compose(request, background, &self.fonts)
    }
}

impl ArtifactRenderer for Compositor {
    fn render(&self, request: &ArtifactRequest) -> Result<Option<Vec<u8>>, AppError> {
        let Some(mut surface) = PixmapSurface::new(ARTIFACT_WIDTH, ARTIFACT_HEIGHT, &self.fonts) else {
            tracing::debug!("no drawing surface available; skipping artifact");
            return Ok(None);
        };

        let commands = self.compose(request)?;
        surface.execute(&commands)?;
        surface.encode_png().map(Some)
    }
}
