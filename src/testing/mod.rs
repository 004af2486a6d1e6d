mod fake_clock;
mod fake_native_share;
mod fake_services;
mod fixed_measure;
mod log_levels;
mod memory_sink;
mod mock_clipboard;

pub use fake_clock::FakeClock;
pub use fake_native_share::FakeNativeShare;
pub use fake_services::{CallLog, FakeExplanationService, FakeRenderer, FakeVisionService};
pub use fixed_measure::FixedAdvanceMeasure;
pub use log_levels::capture_levels;
pub use memory_sink::MemoryArtifactSink;
pub use mock_clipboard::MockClipboard;
