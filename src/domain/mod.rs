pub mod artifact;
pub mod configuration;
pub mod error;
pub mod explanation;
pub mod prediction;
pub mod prompts;

pub use artifact::{
    ARTIFACT_HEIGHT, ARTIFACT_WIDTH, Artifact, ArtifactRequest, VisionImage, artifact_file_name,
    sector_slug, share_text,
};
pub use configuration::{AppConfig, ArtifactConfig, GeminiApiConfig, ShareConfig};
pub use error::{AppError, Subsystem};
pub use explanation::{EMPTY_EXPLANATION_FALLBACK, EXPLANATION_ERROR_PREFIX, ExplanationState};
pub use prediction::{Prediction, SECTORS, TECHNOLOGIES};
