pub mod app_config;
pub mod parse;

pub use app_config::{AppConfig, ArtifactConfig, GeminiApiConfig, ShareConfig};
pub use parse::parse_config_content;
