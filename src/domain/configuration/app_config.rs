//! Tool configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `bright-futures.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Artifact output configuration.
    #[serde(default)]
    pub artifact: ArtifactConfig,
    /// Native share configuration.
    #[serde(default)]
    pub share: ShareConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        self.share.validate()?;
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Base URL up to and including the API version segment.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,
    /// Model used for the explanation text.
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for the background image.
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Sampling temperature for the explanation.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Nucleus sampling for the explanation.
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Aspect ratio requested for the background image.
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text_model.trim().is_empty() {
            return Err(AppError::config_error("gemini.text_model must not be empty"));
        }
        if self.image_model.trim().is_empty() {
            return Err(AppError::config_error("gemini.image_model must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("gemini.timeout_secs must be greater than 0"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("gemini.temperature must be between 0 and 2"));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(AppError::config_error("gemini.top_p must be in (0, 1]"));
        }
        if self.aspect_ratio.split(':').count() != 2 {
            return Err(AppError::config_error("gemini.aspect_ratio must look like '16:9'"));
        }
        Ok(())
    }
}

fn default_api_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.8
}

fn default_top_p() -> f32 {
    0.9
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

/// Where artifacts go and which extra fonts the compositor may use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactConfig {
    /// Directory receiving `vision-<slug>.png` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Additional directories scanned for font files.
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), font_dirs: Vec::new() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// External command acting as the native share sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareConfig {
    /// Program and arguments; empty means no native share is available.
    #[serde(default)]
    pub command: Vec<String>,
}

impl ShareConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.command.first().is_some_and(|program| program.trim().is_empty()) {
            return Err(AppError::config_error("share.command program must not be empty"));
        }
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        !self.command.is_empty()
    }
}
