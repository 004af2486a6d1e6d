//! bright-futures: cast a sector/technology prediction, ask Gemini why, and
//! composite a shareable 1920x1080 vision card.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use adapters::{
    ArboardClipboardWriter, CommandShareAdapter, DataUriArtifactSink, FilesystemArtifactSink,
    HttpGeminiClient,
};
use app::{Compositor, FontBook, PredictionOrchestrator, Session, ShareHelper, load_config};
use domain::AppConfig;
use ports::{ArtifactSink, NativeShare, SystemClock};

pub use app::{SavedArtifact, ShareOutcome};
pub use domain::{AppError, Prediction};

/// Shown when the card could not be produced.
pub const VISION_FAILURE_MESSAGE: &str = "Vision synthesis failed. The future is currently occluded.";

/// Where the prediction for a command comes from.
#[derive(Debug, Clone, Default)]
pub struct PredictionSource {
    pub sector: Option<String>,
    pub technology: Option<String>,
    pub seed: Option<u64>,
}

impl PredictionSource {
    /// Explicit pair if given, otherwise a draw from the catalogs (seeded when asked).
    pub fn resolve(&self) -> Result<Prediction, AppError> {
        match (&self.sector, &self.technology) {
            (Some(sector), Some(technology)) => Prediction::new(sector.as_str(), technology.as_str()),
            (None, None) => Ok(match self.seed {
                Some(seed) => Prediction::random(&mut StdRng::seed_from_u64(seed)),
                None => Prediction::random(&mut rand::thread_rng()),
            }),
            _ => Err(AppError::InvalidInput(
                "sector and technology must be given together".to_string(),
            )),
        }
    }
}

/// Options for [`vision`].
#[derive(Debug, Clone, Default)]
pub struct VisionOptions {
    /// Skip the explanation request and print this text on the card.
    pub explanation: Option<String>,
    /// Overrides `[artifact] output_dir`.
    pub output: Option<PathBuf>,
    /// Print the PNG as a data URI instead of writing a file.
    pub data_uri: bool,
}

fn orchestrator(config: &AppConfig, sink: Box<dyn ArtifactSink>) -> Result<PredictionOrchestrator, AppError> {
    let client = HttpGeminiClient::from_env_with_config(&config.gemini)?;
    let compositor = Compositor::new(FontBook::system(&config.artifact.font_dirs));
    Ok(PredictionOrchestrator::new(
        Box::new(client.clone()),
        Box::new(client),
        Box::new(compositor),
        sink,
    ))
}

/// Cast a prediction and print it.
pub fn predict(source: &PredictionSource) -> Result<Prediction, AppError> {
    let prediction = source.resolve()?;
    println!("{}", prediction.statement());
    Ok(prediction)
}

/// Ask the text model why the prediction holds and print the answer.
pub fn explain(config_path: Option<&Path>, source: &PredictionSource) -> Result<String, AppError> {
    let config = load_config(config_path)?;
    let mut session = Session::new(source.resolve()?);
    let orchestrator = orchestrator(&config, Box::new(FilesystemArtifactSink::new(&config.artifact.output_dir)))?;

    println!("{}", session.prediction().statement());
    let (prediction, state) = session.prediction_and_explanation();
    let text = orchestrator.request_explanation(prediction, state)?;
    println!();
    println!("{}", text);
    Ok(text)
}

/// Build the vision card and write it out.
///
/// Returns `Ok(None)` when no drawing surface was available.
pub fn vision(
    config_path: Option<&Path>,
    source: &PredictionSource,
    options: &VisionOptions,
) -> Result<Option<SavedArtifact>, AppError> {
    let config = load_config(config_path)?;
    let mut session = Session::new(source.resolve()?);

    let sink: Box<dyn ArtifactSink> = if options.data_uri {
        Box::new(DataUriArtifactSink)
    } else {
        let dir = options.output.clone().unwrap_or_else(|| config.artifact.output_dir.clone());
        Box::new(FilesystemArtifactSink::new(dir))
    };
    let orchestrator = orchestrator(&config, sink)?;

    if let Some(text) = options.explanation.as_deref().filter(|text| !text.trim().is_empty()) {
        session.prediction_and_explanation().1.succeed(text);
    }

    if !options.data_uri {
        println!("{}", session.prediction().statement());
    }

    let (prediction, state) = session.prediction_and_explanation();
    let saved = orchestrator.create_artifact(prediction, state).inspect_err(|_| {
        eprintln!("{}", VISION_FAILURE_MESSAGE);
    })?;

    match &saved {
        Some(saved) if !options.data_uri => {
            if !saved.explanation_included {
                println!("⚠️  Explanation unavailable; card rendered without it");
            }
            println!("✅ Vision saved to {}", saved.location.display());
        }
        Some(_) => {}
        None => println!("No drawing surface available; nothing was written"),
    }
    Ok(saved)
}

/// Share the prediction and its explanation, falling back to the clipboard.
///
/// Without `explanation` one is requested first.
pub fn share(
    config_path: Option<&Path>,
    source: &PredictionSource,
    explanation: Option<&str>,
) -> Result<ShareOutcome, AppError> {
    let config = load_config(config_path)?;
    let mut session = Session::new(source.resolve()?);

    match explanation.filter(|text| !text.trim().is_empty()) {
        Some(text) => session.prediction_and_explanation().1.succeed(text),
        None => {
            let orchestrator =
                orchestrator(&config, Box::new(FilesystemArtifactSink::new(&config.artifact.output_dir)))?;
            let (prediction, state) = session.prediction_and_explanation();
            orchestrator.request_explanation(prediction, state)?;
        }
    }

    let native = CommandShareAdapter::from_command(&config.share.command)
        .map(|adapter| Box::new(adapter) as Box<dyn NativeShare>);
    let mut helper = ShareHelper::new(native, ArboardClipboardWriter::new(), SystemClock);

    let outcome = helper.share(&mut session)?;
    match outcome {
        ShareOutcome::Shared => println!("✅ Shared"),
        ShareOutcome::Cancelled => println!("Share cancelled"),
        ShareOutcome::Copied => {
            println!("📋 Copied to clipboard");
            // Keep the clipboard owner alive until the acknowledgment lapses.
            while helper.copy_feedback_visible(&session) {
                std::thread::sleep(session.copy_feedback().remaining(std::time::Instant::now()));
            }
        }
    }
    Ok(outcome)
}
