pub mod cli;
pub mod compositor;
pub mod config;
pub mod orchestrator;
pub mod session;
pub mod share;
pub mod single_flight;

pub use compositor::{Compositor, FontBook};
pub use config::{DEFAULT_CONFIG_FILE, load_config};
pub use orchestrator::{PredictionOrchestrator, SavedArtifact};
pub use session::Session;
pub use share::{COPY_FEEDBACK_DURATION, CopyFeedback, SHARE_TITLE, ShareHelper, ShareOutcome};
pub use single_flight::{FlightPermit, SingleFlight};
