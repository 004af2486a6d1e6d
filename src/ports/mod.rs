mod artifact_renderer;
mod artifact_sink;
mod clipboard_writer;
mod clock;
mod explanation_service;
mod native_share;
mod vision_service;

pub use artifact_renderer::ArtifactRenderer;
pub use artifact_sink::ArtifactSink;
pub use clipboard_writer::ClipboardWriter;
pub use clock::{Clock, SystemClock};
pub use explanation_service::ExplanationService;
pub use native_share::{NativeShare, ShareError};
pub use vision_service::VisionService;
