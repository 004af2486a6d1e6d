use crate::app::compositor::{FontSpec, TextMeasure};
use crate::domain::AppError;

/// Monospace stand-in for real font metrics: every char is `advance` wide.
pub struct FixedAdvanceMeasure {
    advance: f32,
}

impl FixedAdvanceMeasure {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, text: &str, _font: &FontSpec, letter_spacing: f32) -> Result<f32, AppError> {
        Ok(text.chars().count() as f32 * (self.advance + letter_spacing))
    }
}
