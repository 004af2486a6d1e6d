//! Ordered draw commands and a canvas-style recorder that produces them.

use std::sync::Arc;

use image::RgbaImage;
use tiny_skia::Color;

use crate::domain::AppError;

/// Font selection for a text command, in CSS terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub weight: u16,
    pub italic: bool,
    pub size_px: f32,
}

impl FontSpec {
    pub const fn new(family: &'static str, weight: u16, italic: bool, size_px: f32) -> Self {
        Self { family, weight, italic, size_px }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

/// Blurred drop shadow painted beneath a text command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Concentric radial gradient; `inner` holds inside `inner_radius`, `outer` beyond `outer_radius`.
    RadialGradient {
        cx: f32,
        cy: f32,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Image stretched into the destination rectangle.
    Image { image: Arc<RgbaImage>, x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32, fill: Fill },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: FontSpec,
        letter_spacing: f32,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
        shadow: Option<Shadow>,
    },
}

impl DrawCommand {
    pub fn shadow(&self) -> Option<&Shadow> {
        match self {
            DrawCommand::Text { shadow, .. } => shadow.as_ref(),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Width of a rendered run of text, letter spacing included.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec, letter_spacing: f32) -> Result<f32, AppError>;
}

const DEFAULT_FONT: FontSpec = FontSpec::new("sans-serif", 400, false, 10.0);
const SHADOW_OFFSET_Y: f32 = 4.0;

/// Records drawing calls the way a 2D canvas context would, keeping the
/// current font, fill, spacing and shadow as state that text commands capture.
pub struct DrawList<'m> {
    measure: &'m dyn TextMeasure,
    commands: Vec<DrawCommand>,
    font: FontSpec,
    fill_color: Color,
    letter_spacing: f32,
    align: TextAlign,
    baseline: TextBaseline,
    shadow: Option<Shadow>,
}

impl<'m> DrawList<'m> {
    pub fn new(measure: &'m dyn TextMeasure) -> Self {
        Self {
            measure,
            commands: Vec::new(),
            font: DEFAULT_FONT,
            fill_color: Color::BLACK,
            letter_spacing: 0.0,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            shadow: None,
        }
    }

    pub fn draw_image(&mut self, image: Arc<RgbaImage>, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Image { image, x, y, width, height });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Fill) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, fill });
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_letter_spacing(&mut self, spacing: f32) {
        self.letter_spacing = spacing;
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    /// Turn on the drop shadow for every following text command.
    pub fn apply_shadow(&mut self, blur: f32, color: Color) {
        self.shadow = Some(Shadow { color, blur, offset_x: 0.0, offset_y: SHADOW_OFFSET_Y });
    }

    pub fn clear_shadow(&mut self) {
        self.shadow = None;
    }

    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font,
            letter_spacing: self.letter_spacing,
            color: self.fill_color,
            align: self.align,
            baseline: self.baseline,
            shadow: self.shadow,
        });
    }

    pub fn measure_text(&self, text: &str) -> Result<f32, AppError> {
        self.measure.measure(text, &self.font, self.letter_spacing)
    }

    pub fn finish(self) -> Vec<DrawCommand> {
        self.commands
    }
}
