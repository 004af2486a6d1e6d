//! tiny-skia surface that interprets a draw command list.

use ab_glyph::{Font, OutlineCurve, Point as GlyphPoint};
use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, FilterQuality, GradientStop, IntSize, Paint, Path, PathBuilder, Pixmap,
    PixmapPaint, Point, RadialGradient, Rect, SpreadMode, Transform,
};

use crate::app::compositor::draw::{DrawCommand, Fill, FontSpec, Shadow, TextAlign, TextBaseline};
use crate::app::compositor::fonts::{FontBook, ResolvedFace, SYNTHETIC_ITALIC_SKEW, TextRun};
use crate::domain::AppError;

/// Pixel canvas backed by a premultiplied RGBA pixmap.
pub struct PixmapSurface<'f> {
    pixmap: Pixmap,
    fonts: &'f FontBook,
}

impl<'f> PixmapSurface<'f> {
    /// `None` when a canvas of this size cannot be allocated.
    pub fn new(width: u32, height: u32, fonts: &'f FontBook) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap, fonts })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn execute(&mut self, commands: &[DrawCommand]) -> Result<(), AppError> {
        for command in commands {
            match command {
                DrawCommand::Image { image, x, y, width, height } => {
                    self.draw_image(image, *x, *y, *width, *height)?
                }
                DrawCommand::FillRect { x, y, width, height, fill } => {
                    self.fill_rect(*x, *y, *width, *height, fill)?
                }
                DrawCommand::Text { text, x, y, font, letter_spacing, color, align, baseline, shadow } => {
                    self.fill_text(text, *x, *y, font, *letter_spacing, *color, *align, *baseline, shadow.as_ref())?
                }
            }
        }
        Ok(())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, AppError> {
        self.pixmap.encode_png().map_err(|e| AppError::Render(format!("PNG encoding failed: {}", e)))
    }

    fn draw_image(&mut self, image: &RgbaImage, x: f32, y: f32, width: f32, height: f32) -> Result<(), AppError> {
        let source = pixmap_from_rgba(image)?;
        let transform = Transform::from_row(
            width / source.width() as f32,
            0.0,
            0.0,
            height / source.height() as f32,
            x,
            y,
        );
        let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
        self.pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: &Fill) -> Result<(), AppError> {
        let rect = Rect::from_xywh(x, y, width, height)
            .ok_or_else(|| AppError::Render(format!("invalid rectangle {}x{}", width, height)))?;

        let mut paint = Paint::default();
        match fill {
            Fill::Solid(color) => paint.set_color(*color),
            Fill::RadialGradient { cx, cy, inner_radius, outer_radius, inner, outer } => {
                let center = Point::from_xy(*cx, *cy);
                let inner_stop = (inner_radius / outer_radius).clamp(0.0, 1.0);
                paint.shader = RadialGradient::new(
                    center,
                    center,
                    *outer_radius,
                    vec![GradientStop::new(inner_stop, *inner), GradientStop::new(1.0, *outer)],
                    SpreadMode::Pad,
                    Transform::identity(),
                )
                .ok_or_else(|| AppError::Render("degenerate radial gradient".into()))?;
            }
        }

        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        letter_spacing: f32,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
        shadow: Option<&Shadow>,
    ) -> Result<(), AppError> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let face = self.fonts.resolve(font)?;
        let run = face.layout(text, font.size_px, letter_spacing);

        let origin_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - run.width / 2.0,
            TextAlign::Right => x - run.width,
        };
        let baseline_y = match baseline {
            TextBaseline::Alphabetic => y,
            TextBaseline::Middle => y + (run.ascent + run.descent) / 2.0,
        };

        let Some(path) = text_path(&face, &run, origin_x, baseline_y) else {
            return Ok(());
        };

        if let Some(shadow) = shadow {
            self.draw_shadow(&path, shadow, color.alpha())?;
        }

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn draw_shadow(&mut self, path: &Path, shadow: &Shadow, fill_alpha: f32) -> Result<(), AppError> {
        let sigma = shadow.blur / 2.0;
        let pad = (sigma * 3.0).ceil() as i32 + 1;
        let bounds = path.bounds();
        let left = bounds.left().floor() as i32 - pad;
        let top = bounds.top().floor() as i32 - pad;
        let width = bounds.width().ceil() as u32 + 2 * pad as u32 + 1;
        let height = bounds.height().ceil() as u32 + 2 * pad as u32 + 1;

        let mut layer = Pixmap::new(width, height)
            .ok_or_else(|| AppError::Render("cannot allocate shadow layer".into()))?;

        let mut color = shadow.color;
        color.apply_opacity(fill_alpha);
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        layer.fill_path(
            path,
            &paint,
            FillRule::Winding,
            Transform::from_translate(-left as f32, -top as f32),
            None,
        );

        let layer = if sigma > 0.0 { blur_pixmap(layer, sigma)? } else { layer };
        self.pixmap.draw_pixmap(
            left + shadow.offset_x.round() as i32,
            top + shadow.offset_y.round() as i32,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// Outline every glyph of `run` into one path, y flipped into canvas space.
fn text_path(face: &ResolvedFace, run: &TextRun, origin_x: f32, baseline_y: f32) -> Option<Path> {
    let skew = if face.synthetic_italic { SYNTHETIC_ITALIC_SKEW } else { 0.0 };
    let mut builder = PathBuilder::new();

    for glyph in &run.glyphs {
        let Some(outline) = face.font.outline(glyph.id) else {
            continue;
        };
        let map = |p: GlyphPoint| {
            let up = p.y * run.scale;
            (origin_x + glyph.x + p.x * run.scale + up * skew, baseline_y - up)
        };

        let mut last: Option<GlyphPoint> = None;
        for curve in &outline.curves {
            let start = match curve {
                OutlineCurve::Line(p0, _) | OutlineCurve::Quad(p0, _, _) | OutlineCurve::Cubic(p0, _, _, _) => *p0,
            };
            if last != Some(start) {
                if last.is_some() {
                    builder.close();
                }
                let (sx, sy) = map(start);
                builder.move_to(sx, sy);
            }
            let end = match curve {
                OutlineCurve::Line(_, p1) => {
                    let (x, y) = map(*p1);
                    builder.line_to(x, y);
                    *p1
                }
                OutlineCurve::Quad(_, c, p2) => {
                    let ((cx, cy), (x, y)) = (map(*c), map(*p2));
                    builder.quad_to(cx, cy, x, y);
                    *p2
                }
                OutlineCurve::Cubic(_, c1, c2, p3) => {
                    let ((c1x, c1y), (c2x, c2y), (x, y)) = (map(*c1), map(*c2), map(*p3));
                    builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
                    *p3
                }
            };
            last = Some(end);
        }
        if last.is_some() {
            builder.close();
        }
    }

    builder.finish()
}

fn pixmap_from_rgba(image: &RgbaImage) -> Result<Pixmap, AppError> {
    let size = IntSize::from_wh(image.width(), image.height())
        .ok_or_else(|| AppError::Render("background image has no pixels".into()))?;

    let mut data = image.as_raw().clone();
    for px in data.chunks_exact_mut(4) {
        let alpha = u16::from(px[3]);
        for channel in &mut px[..3] {
            *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
        }
    }

    Pixmap::from_vec(data, size).ok_or_else(|| AppError::Render("background buffer size mismatch".into()))
}

/// Gaussian blur of a premultiplied layer.
fn blur_pixmap(layer: Pixmap, sigma: f32) -> Result<Pixmap, AppError> {
    let (width, height) = (layer.width(), layer.height());
    let buffer = RgbaImage::from_raw(width, height, layer.take())
        .ok_or_else(|| AppError::Render("shadow layer size mismatch".into()))?;

    let mut data = image::imageops::blur(&buffer, sigma).into_raw();
    for px in data.chunks_exact_mut(4) {
        let alpha = px[3];
        for channel in &mut px[..3] {
            *channel = (*channel).min(alpha);
        }
    }

    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| AppError::Render("empty shadow layer".into()))?;
    Pixmap::from_vec(data, size).ok_or_else(|| AppError::Render("shadow layer size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use image::Rgba;

    fn white_background() -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])))
    }

    fn overlay_commands(width: f32, height: f32) -> Vec<DrawCommand> {
        vec![
            DrawCommand::Image { image: white_background(), x: 0.0, y: 0.0, width, height },
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width,
                height,
                fill: Fill::Solid(Color::from_rgba8(11, 17, 33, 191)),
            },
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width,
                height,
                fill: Fill::RadialGradient {
                    cx: width / 2.0,
                    cy: height / 2.0,
                    inner_radius: 100.0,
                    outer_radius: 1200.0,
                    inner: Color::from_rgba8(0, 0, 0, 0),
                    outer: Color::from_rgba8(0, 0, 0, 217),
                },
            },
        ]
    }

    #[test]
    fn image_is_stretched_to_fill_the_canvas() {
        let fonts = FontBook::empty();
        let mut surface = PixmapSurface::new(64, 32, &fonts).unwrap();
        surface
            .execute(&[DrawCommand::Image { image: white_background(), x: 0.0, y: 0.0, width: 64.0, height: 32.0 }])
            .unwrap();

        let corner = surface.pixmap().pixel(63, 31).unwrap();
        assert_eq!(corner.alpha(), 255);
        assert!(corner.red() > 250);
    }

    #[test]
    fn vignette_darkens_corners_more_than_center() {
        let fonts = FontBook::empty();
        let mut surface = PixmapSurface::new(1920, 1080, &fonts).unwrap();
        surface.execute(&overlay_commands(1920.0, 1080.0)).unwrap();

        let center = surface.pixmap().pixel(960, 540).unwrap();
        let corner = surface.pixmap().pixel(0, 0).unwrap();

        // White under a 75% navy overlay, untouched by the vignette's transparent core.
        assert!((i32::from(center.red()) - 72).abs() <= 2, "center red = {}", center.red());
        assert!(corner.red() < center.red() / 2);
        assert_eq!(corner.alpha(), 255);
    }

    #[test]
    fn blank_text_draws_nothing_even_without_fonts() {
        let fonts = FontBook::empty();
        let mut surface = PixmapSurface::new(8, 8, &fonts).unwrap();
        let command = DrawCommand::Text {
            text: " ".into(),
            x: 4.0,
            y: 4.0,
            font: FontSpec::new("Montserrat", 400, false, 12.0),
            letter_spacing: 0.0,
            color: Color::WHITE,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            shadow: None,
        };
        surface.execute(&[command]).unwrap();
        assert!(surface.pixmap().pixels().iter().all(|px| px.alpha() == 0));
    }

    #[test]
    fn text_without_fonts_is_an_error() {
        let fonts = FontBook::empty();
        let mut surface = PixmapSurface::new(8, 8, &fonts).unwrap();
        let command = DrawCommand::Text {
            text: "HI".into(),
            x: 4.0,
            y: 4.0,
            font: FontSpec::new("Montserrat", 400, false, 12.0),
            letter_spacing: 0.0,
            color: Color::WHITE,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            shadow: None,
        };
        assert!(matches!(surface.execute(&[command]), Err(AppError::FontUnavailable(_))));
    }

    #[test]
    fn shadowed_text_spills_below_glyphs() {
        let fonts = FontBook::embedded();
        let mut surface = PixmapSurface::new(400, 200, &fonts).unwrap();
        let text = |shadow| DrawCommand::Text {
            text: "MMMM".into(),
            x: 200.0,
            y: 100.0,
            font: FontSpec::new("Comfortaa", 700, true, 64.0),
            letter_spacing: 0.0,
            color: Color::WHITE,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            shadow,
        };
        surface
            .execute(&[text(Some(Shadow { color: Color::BLACK, blur: 30.0, offset_x: 0.0, offset_y: 4.0 }))])
            .unwrap();
        let painted = surface.pixmap().pixels().iter().filter(|px| px.alpha() > 0).count();

        let mut plain = PixmapSurface::new(400, 200, &fonts).unwrap();
        plain.execute(&[text(None)]).unwrap();
        let plain_painted = plain.pixmap().pixels().iter().filter(|px| px.alpha() > 0).count();

        assert!(painted > plain_painted);
    }

    #[test]
    fn encodes_png_signature() {
        let fonts = FontBook::empty();
        let surface = PixmapSurface::new(2, 2, &fonts).unwrap();
        let png = surface.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
