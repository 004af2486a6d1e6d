use std::path::PathBuf;

use crate::domain::{AppError, Artifact};

/// Port for delivering a finished artifact to the user.
pub trait ArtifactSink {
    /// Deliver the artifact and report where it ended up.
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, AppError>;
}
