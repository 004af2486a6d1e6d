//! Font discovery (fontdb) and glyph metrics/outlines (ab_glyph).

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use ab_glyph::{Font, FontVec, GlyphId};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};

use crate::app::compositor::draw::{FontSpec, TextMeasure};
use crate::domain::AppError;

/// Horizontal shear applied when an italic is requested but only an upright face exists.
pub const SYNTHETIC_ITALIC_SKEW: f32 = 0.2;

/// Family answering `sans-serif` queries; always present through the embedded faces.
pub const FALLBACK_FAMILY: &str = "DejaVu Sans";

const EMBEDDED_FACES: [&[u8]; 5] = [
    include_bytes!("../../assets/fonts/DejaVuSans.ttf"),
    include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf"),
    include_bytes!("../../assets/fonts/DejaVuSans-ExtraLight.ttf"),
    include_bytes!("../../assets/fonts/DejaVuSans-Oblique.ttf"),
    include_bytes!("../../assets/fonts/DejaVuSans-BoldOblique.ttf"),
];

/// A face chosen for a `FontSpec`.
#[derive(Clone)]
pub struct ResolvedFace {
    pub font: Arc<FontVec>,
    /// Weight of the matched face, which may differ from the requested one.
    pub weight: u16,
    /// The matched face is itself italic or oblique.
    pub slanted: bool,
    pub synthetic_italic: bool,
}

/// Glyph placed along a run, `x` in pixels from the run start.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph {
    pub id: GlyphId,
    pub x: f32,
}

/// Laid-out single line of text.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
    /// Pixels per font unit.
    pub scale: f32,
}

impl ResolvedFace {
    /// Lay out `text` at `size_px`, adding `letter_spacing` after every character.
    pub fn layout(&self, text: &str, size_px: f32, letter_spacing: f32) -> TextRun {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        let scale = size_px / units_per_em;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut cursor = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                cursor += self.font.kern_unscaled(prev, id) * scale;
            }
            glyphs.push(PlacedGlyph { id, x: cursor });
            cursor += self.font.h_advance_unscaled(id) * scale + letter_spacing;
            previous = Some(id);
        }

        TextRun {
            glyphs,
            width: cursor,
            ascent: self.font.ascent_unscaled() * scale,
            descent: self.font.descent_unscaled() * scale,
            scale,
        }
    }
}

/// Embedded fallback faces, system fonts and any configured font directories.
pub struct FontBook {
    db: Database,
    loaded: RefCell<HashMap<fontdb::ID, Arc<FontVec>>>,
}

impl FontBook {
    /// Load the embedded faces, system fonts and every font found under `extra_dirs`.
    pub fn system(extra_dirs: &[PathBuf]) -> Self {
        let mut db = embedded_database();
        db.load_system_fonts();
        for dir in extra_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(faces = db.len(), "font database loaded");
        Self::from_database(db)
    }

    /// Only the embedded faces, so resolution is the same on every host.
    pub fn embedded() -> Self {
        Self::from_database(embedded_database())
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::from_database(Database::new())
    }

    fn from_database(db: Database) -> Self {
        Self { db, loaded: RefCell::new(HashMap::new()) }
    }

    /// Pick the closest face for `spec` in the named family, else in the
    /// sans-serif family, matching weight and style the way CSS does.
    pub fn resolve(&self, spec: &FontSpec) -> Result<ResolvedFace, AppError> {
        let style = if spec.italic { Style::Italic } else { Style::Normal };
        let query = Query {
            families: &[Family::Name(spec.family), Family::SansSerif],
            weight: Weight(spec.weight),
            stretch: Stretch::Normal,
            style,
        };

        let face = self
            .db
            .query(&query)
            .and_then(|id| self.db.face(id))
            .ok_or_else(|| AppError::FontUnavailable(spec.family.to_string()))?;

        let slanted = face.style != Style::Normal;
        let weight = face.weight.0;
        let font = self.load(face.id, spec)?;

        Ok(ResolvedFace { font, weight, slanted, synthetic_italic: spec.italic && !slanted })
    }

    fn load(&self, id: fontdb::ID, spec: &FontSpec) -> Result<Arc<FontVec>, AppError> {
        if let Some(font) = self.loaded.borrow().get(&id) {
            return Ok(Arc::clone(font));
        }

        let font = self
            .db
            .with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
            .and_then(Result::ok)
            .map(Arc::new)
            .ok_or_else(|| AppError::FontUnavailable(spec.family.to_string()))?;

        self.loaded.borrow_mut().insert(id, Arc::clone(&font));
        Ok(font)
    }
}

fn embedded_database() -> Database {
    let mut db = Database::new();
    for data in EMBEDDED_FACES {
        db.load_font_data(data.to_vec());
    }
    db.set_sans_serif_family(FALLBACK_FAMILY);
    db
}

impl TextMeasure for FontBook {
    fn measure(&self, text: &str, font: &FontSpec, letter_spacing: f32) -> Result<f32, AppError> {
        Ok(self.resolve(font)?.layout(text, font.size_px, letter_spacing).width)
    }
}
