//! Explanation service port definition.

use crate::domain::AppError;

/// Port for the remote text generator.
pub trait ExplanationService {
    /// Send a free-text prompt. `Ok(None)` means the service answered with no text.
    fn generate_text(&self, prompt: &str) -> Result<Option<String>, AppError>;
}
