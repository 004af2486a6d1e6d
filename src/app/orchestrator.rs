//! Sequencing of the explanation and vision calls into a finished artifact.

use std::path::PathBuf;

use crate::app::single_flight::SingleFlight;
use crate::domain::prompts::{explanation_prompt, vision_prompt};
use crate::domain::{
    AppError, Artifact, ArtifactRequest, EMPTY_EXPLANATION_FALLBACK, EXPLANATION_ERROR_PREFIX,
    ExplanationState, Prediction, Subsystem, artifact_file_name,
};
use crate::ports::{ArtifactRenderer, ArtifactSink, ExplanationService, VisionService};

/// An artifact that was rendered and delivered.
#[derive(Debug, Clone)]
pub struct SavedArtifact {
    pub location: PathBuf,
    pub artifact: Artifact,
    pub explanation_included: bool,
}

pub struct PredictionOrchestrator {
    explainer: Box<dyn ExplanationService>,
    vision: Box<dyn VisionService>,
    renderer: Box<dyn ArtifactRenderer>,
    sink: Box<dyn ArtifactSink>,
    explanation_flight: SingleFlight,
    artifact_flight: SingleFlight,
}

impl PredictionOrchestrator {
    pub fn new(
        explainer: Box<dyn ExplanationService>,
        vision: Box<dyn VisionService>,
        renderer: Box<dyn ArtifactRenderer>,
        sink: Box<dyn ArtifactSink>,
    ) -> Self {
        Self {
            explainer,
            vision,
            renderer,
            sink,
            explanation_flight: SingleFlight::new("explanation"),
            artifact_flight: SingleFlight::new("artifact"),
        }
    }

    /// Ask for the argument behind `prediction`, tracking progress in `state`.
    ///
    /// An empty answer becomes [`EMPTY_EXPLANATION_FALLBACK`]. Failures are
    /// recorded in `state` and returned with the explanation error prefix.
    pub fn request_explanation(
        &self,
        prediction: &Prediction,
        state: &mut ExplanationState,
    ) -> Result<String, AppError> {
        let _permit = self.explanation_flight.try_begin()?;
        state.begin_loading();

        match self.explainer.generate_text(&explanation_prompt(prediction)) {
            Ok(text) => {
                let text = text
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| EMPTY_EXPLANATION_FALLBACK.to_string());
                state.succeed(text.clone());
                Ok(text)
            }
            Err(err) => {
                tracing::debug!(error = %err, "explanation request failed");
                let status = match &err {
                    AppError::RemoteService { status, .. } => *status,
                    _ => None,
                };
                let message = format!("{}: {}", EXPLANATION_ERROR_PREFIX, err.remote_message());
                state.fail(message.clone());
                Err(AppError::remote(Subsystem::Explanation, message, status))
            }
        }
    }

    /// Build and deliver the vision card for `prediction`.
    ///
    /// The explanation is fetched first when `state` has none; its failure is
    /// logged and the card is made without it. Vision, rendering and delivery
    /// failures abort. `Ok(None)` means no drawing surface was available.
    pub fn create_artifact(
        &self,
        prediction: &Prediction,
        state: &mut ExplanationState,
    ) -> Result<Option<SavedArtifact>, AppError> {
        let _permit = self.artifact_flight.try_begin()?;

        let explanation = self.explanation_for_artifact(prediction, state);

        let image = self.vision.generate_image(&vision_prompt(prediction)).inspect_err(|err| {
            tracing::error!(error = %err, "vision request failed");
        })?;

        let explanation_included = explanation.is_some();
        let request = ArtifactRequest::new(prediction, explanation, image.bytes);
        let Some(png) = self.renderer.render(&request)? else {
            return Ok(None);
        };

        let artifact = Artifact { file_name: artifact_file_name(prediction.sector()), png };
        let location = self.sink.deliver(&artifact)?;
        Ok(Some(SavedArtifact { location, artifact, explanation_included }))
    }

    fn explanation_for_artifact(
        &self,
        prediction: &Prediction,
        state: &mut ExplanationState,
    ) -> Option<String> {
        if let Some(text) = state.text_opt() {
            return Some(text.to_string());
        }

        match self.request_explanation(prediction, state) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "could not fetch explanation for artifact, proceeding with basic card"
                );
                None
            }
        }
    }
}
