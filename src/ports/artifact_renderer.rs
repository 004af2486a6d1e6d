use crate::domain::{AppError, ArtifactRequest};

/// Port for turning an artifact request into PNG bytes.
pub trait ArtifactRenderer {
    /// Returns `Ok(None)` when no drawing surface could be obtained.
    fn render(&self, request: &ArtifactRequest) -> Result<Option<Vec<u8>>, AppError>;
}
