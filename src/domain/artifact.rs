//! Artifact value types, file naming and the share payload.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::Prediction;

/// Canvas width of every artifact.
pub const ARTIFACT_WIDTH: u32 = 1920;
/// Canvas height of every artifact.
pub const ARTIFACT_HEIGHT: u32 = 1080;

/// Everything the compositor needs for one artifact. Built per request.
#[derive(Debug, Clone)]
pub struct ArtifactRequest {
    pub sector: String,
    pub technology: String,
    pub explanation_text: Option<String>,
    pub background: Vec<u8>,
}

impl ArtifactRequest {
    pub fn new(prediction: &Prediction, explanation_text: Option<String>, background: Vec<u8>) -> Self {
        Self {
            sector: prediction.sector().to_string(),
            technology: prediction.technology().to_string(),
            explanation_text: explanation_text.filter(|text| !text.is_empty()),
            background,
        }
    }
}

/// Image returned by the vision service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionImage {
    pub bytes: Vec<u8>,
}

/// A rendered PNG ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub png: Vec<u8>,
}

impl Artifact {
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Lowercased sector reduced to `[a-z0-9-]`, every other run of characters
/// becoming a single hyphen. Never contains a path separator; a sector with
/// nothing left after reduction slugs to `sector`.
pub fn sector_slug(sector: &str) -> String {
    let mapped: String = sector
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect();
    let slug = mapped.split('-').filter(|part| !part.is_empty()).collect::<Vec<_>>().join("-");
    if slug.is_empty() { "sector".to_string() } else { slug }
}

/// `vision-<slug>.png`
pub fn artifact_file_name(sector: &str) -> String {
    format!("vision-{}.png", sector_slug(sector))
}

/// Plain-text summary handed to native share or the clipboard.
pub fn share_text(prediction: &Prediction, explanation: &str) -> String {
    format!(
        "{}\n\nWhy? {}\n\nGenerated by Bright Futures Generator.",
        prediction.statement(),
        explanation
    )
}
