//! Artifact sinks: PNG files on disk, or a data URI on stdout.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::{AppError, Artifact};
use crate::ports::ArtifactSink;

/// Writes `vision-<slug>.png` into an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactSink {
    output_dir: PathBuf,
}

impl FilesystemArtifactSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }
}

impl ArtifactSink for FilesystemArtifactSink {
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&artifact.file_name);
        fs::write(&path, &artifact.png)?;
        tracing::info!(path = %path.display(), bytes = artifact.png.len(), "artifact written");
        Ok(path)
    }
}

/// Prints the artifact as a `data:image/png;base64,...` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriArtifactSink;

impl ArtifactSink for DataUriArtifactSink {
    fn deliver(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", artifact.data_uri())?;
        out.flush()?;
        Ok(PathBuf::from(&artifact.file_name))
    }
}
