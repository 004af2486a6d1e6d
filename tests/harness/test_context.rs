//! Shared testing harness for `bright-futures` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const TEST_API_KEY: &str = "test-key";

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `bright-futures.toml` pointing the Gemini client at `api_base_url`.
    pub(crate) fn write_config(&self, api_base_url: &str, extra: &str) {
        let content = format!(
            r#"[gemini]
api_base_url = "{}"
text_model = "text-model"
image_model = "image-model"
timeout_secs = 5

{}
"#,
            api_base_url, extra
        );
        fs::write(self.work_dir.join("bright-futures.toml"), content)
            .expect("write bright-futures.toml");
    }

    /// Build a command for invoking the compiled binary with a test API key.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env("GEMINI_API_KEY", TEST_API_KEY);
        cmd
    }

    /// Build a command with no API key in the environment.
    pub(crate) fn cli_without_key(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("bright-futures").expect("Failed to locate bright-futures binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub(crate) fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("read file from work dir")
    }

    /// Names of the PNG files under `dir` (relative to the work dir).
    pub(crate) fn pngs_in(&self, dir: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.work_dir.join(dir)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".png"))
            .collect();
        names.sort();
        names
    }
}
