pub mod artifact_filesystem;
pub mod clipboard_arboard;
pub mod gemini_client_http;
pub mod share_command;

pub use artifact_filesystem::{DataUriArtifactSink, FilesystemArtifactSink};
pub use clipboard_arboard::ArboardClipboardWriter;
pub use gemini_client_http::HttpGeminiClient;
pub use share_command::CommandShareAdapter;
