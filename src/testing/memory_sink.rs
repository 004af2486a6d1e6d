use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Artifact};
use crate::ports::ArtifactSink;

/// Keeps delivered artifacts in memory.
#[derive(Clone, Default)]
pub struct MemoryArtifactSink {
    delivered: Arc<Mutex<Vec<Artifact>>>,
}

impl MemoryArtifactSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<Artifact> {
        self.delivered.lock().unwrap().clone()
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        self.delivered.lock().unwrap().push(artifact.clone());
        Ok(PathBuf::from(&artifact.file_name))
    }
}
