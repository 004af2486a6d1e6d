//! The fixed 1920x1080 vision card layout.

use std::sync::Arc;

use image::RgbaImage;
use tiny_skia::Color;

use crate::app::compositor::draw::{
    DrawCommand, DrawList, Fill, FontSpec, TextAlign, TextBaseline, TextMeasure,
};
use crate::app::compositor::wrap::wrap_words;
use crate::domain::{ARTIFACT_HEIGHT, ARTIFACT_WIDTH, AppError, ArtifactRequest};

const MONTSERRAT: &str = "Montserrat";
const COMFORTAA: &str = "Comfortaa";

const CENTER_X: f32 = ARTIFACT_WIDTH as f32 / 2.0;

const BADGE_TEXT: &str = "BRIGHT FUTURES GENERATOR v2.0";
const LEAD_TEXT: &str = "THE FUTURE OF";
const CONNECTOR_TEXT: &str = "WILL BE BRIGHT BECAUSE OF";
const FOOTER_TEXT: &str = "A TUHAF STUDIO EXPERIMENT \u{2022} GEMINI SYNTHESIZED";

const BADGE_Y: f32 = 80.0;
const LEAD_Y: f32 = 240.0;
const SECTOR_Y: f32 = 350.0;
const CONNECTOR_Y: f32 = 445.0;
const TECHNOLOGY_Y: f32 = 560.0;
const EXPLANATION_Y: f32 = 680.0;
const EXPLANATION_LINE_HEIGHT: f32 = 55.0;
const FOOTER_Y: f32 = 1030.0;

/// Widest line of the wrapped explanation.
pub const EXPLANATION_MAX_WIDTH: f32 = 1400.0;

const VIGNETTE_INNER_RADIUS: f32 = 100.0;
const VIGNETTE_OUTER_RADIUS: f32 = 1200.0;

const HEADLINE_FONT: FontSpec = FontSpec::new(COMFORTAA, 700, true, 92.0);
const HEADLINE_SHADOW_BLUR: f32 = 30.0;
const EXPLANATION_SHADOW_BLUR: f32 = 15.0;

fn css_rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::from_rgba8(r, g, b, (a * 255.0).round() as u8)
}

fn css_hex(rgb: u32) -> Color {
    Color::from_rgba8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
}

/// Canvas text has no line breaks or tabs: control characters become spaces.
fn flatten_controls(text: &str) -> String {
    text.chars().map(|c| if c.is_whitespace() || c.is_control() { ' ' } else { c }).collect()
}

/// Lay out the card for `request` over an already decoded `background`.
pub fn compose(
    request: &ArtifactRequest,
    background: Arc<RgbaImage>,
    measure: &dyn TextMeasure,
) -> Result<Vec<DrawCommand>, AppError> {
    let (width, height) = (ARTIFACT_WIDTH as f32, ARTIFACT_HEIGHT as f32);
    let mut list = DrawList::new(measure);

    list.draw_image(background, 0.0, 0.0, width, height);
    list.fill_rect(0.0, 0.0, width, height, Fill::Solid(css_rgba(11, 17, 33, 0.75)));
    list.fill_rect(
        0.0,
        0.0,
        width,
        height,
        Fill::RadialGradient {
            cx: width / 2.0,
            cy: height / 2.0,
            inner_radius: VIGNETTE_INNER_RADIUS,
            outer_radius: VIGNETTE_OUTER_RADIUS,
            inner: css_rgba(0, 0, 0, 0.0),
            outer: css_rgba(0, 0, 0, 0.85),
        },
    );

    list.set_text_align(TextAlign::Center);
    list.set_text_baseline(TextBaseline::Middle);

    list.set_font(FontSpec::new(MONTSERRAT, 900, false, 22.0));
    list.set_fill_color(css_hex(0xF3C5AB));
    list.set_letter_spacing(10.0);
    list.fill_text(BADGE_TEXT, CENTER_X, BADGE_Y);

    list.set_fill_color(css_rgba(255, 255, 255, 0.8));
    list.set_letter_spacing(12.0);
    list.set_font(FontSpec::new(MONTSERRAT, 500, false, 36.0));
    list.fill_text(LEAD_TEXT, CENTER_X, LEAD_Y);

    list.apply_shadow(HEADLINE_SHADOW_BLUR, css_rgba(0, 0, 0, 0.9));
    list.set_font(HEADLINE_FONT);
    list.set_fill_color(css_hex(0x238197));
    list.set_letter_spacing(-2.0);
    list.fill_text(&flatten_controls(&request.sector.to_uppercase()), CENTER_X, SECTOR_Y);
    list.clear_shadow();

    list.set_fill_color(css_rgba(255, 255, 255, 0.5));
    list.set_letter_spacing(10.0);
    list.set_font(FontSpec::new(MONTSERRAT, 300, false, 36.0));
    list.fill_text(CONNECTOR_TEXT, CENTER_X, CONNECTOR_Y);

    list.apply_shadow(HEADLINE_SHADOW_BLUR, css_rgba(0, 0, 0, 0.9));
    list.set_font(HEADLINE_FONT);
    list.set_fill_color(css_hex(0xDE8859));
    list.set_letter_spacing(-2.0);
    list.fill_text(&flatten_controls(&request.technology.to_uppercase()), CENTER_X, TECHNOLOGY_Y);
    list.clear_shadow();

    if let Some(explanation) = request.explanation_text.as_deref() {
        list.set_font(FontSpec::new(COMFORTAA, 300, true, 22.0));
        list.set_fill_color(css_rgba(248, 250, 252, 0.98));
        list.set_letter_spacing(0.5);
        list.apply_shadow(EXPLANATION_SHADOW_BLUR, css_rgba(0, 0, 0, 0.5));

        let quoted = format!("\"{}\"", flatten_controls(explanation));
        let lines = wrap_words(&quoted, EXPLANATION_MAX_WIDTH, |line| list.measure_text(line))?;
        let mut y = EXPLANATION_Y;
        for line in &lines {
            list.fill_text(line, CENTER_X, y);
            y += EXPLANATION_LINE_HEIGHT;
        }
    }

    list.clear_shadow();
    list.set_font(FontSpec::new(MONTSERRAT, 700, false, 22.0));
    list.set_fill_color(css_rgba(255, 255, 255, 0.3));
    list.set_letter_spacing(8.0);
    list.fill_text(FOOTER_TEXT, CENTER_X, FOOTER_Y);

    let commands = list.finish();
    tracing::debug!(commands = commands.len(), "artifact layout composed");
    Ok(commands)
}
