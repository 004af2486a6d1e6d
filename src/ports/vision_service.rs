//! Vision service port definition.

use crate::domain::{AppError, VisionImage};

/// Port for the remote image generator.
pub trait VisionService {
    /// Send a free-text prompt and return the first inline image of the response.
    fn generate_image(&self, prompt: &str) -> Result<VisionImage, AppError>;
}
