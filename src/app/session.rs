use rand::Rng;

use crate::app::share::CopyFeedback;
use crate::domain::{ExplanationState, Prediction};

/// Transient state of one run: the current prediction, its explanation and
/// the "copied" acknowledgment.
#[derive(Debug, Clone)]
pub struct Session {
    prediction: Prediction,
    explanation: ExplanationState,
    copy_feedback: CopyFeedback,
}

impl Session {
    pub fn new(prediction: Prediction) -> Self {
        Self { prediction, explanation: ExplanationState::new(), copy_feedback: CopyFeedback::default() }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Prediction::random(rng))
    }

    /// Replace the prediction and forget everything derived from the old one.
    pub fn recast<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.prediction = Prediction::random(rng);
        self.explanation.reset();
        self.copy_feedback.clear();
    }

    pub fn prediction(&self) -> &Prediction {
        &self.prediction
    }

    pub fn explanation(&self) -> &ExplanationState {
        &self.explanation
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    pub fn copy_feedback_mut(&mut self) -> &mut CopyFeedback {
        &mut self.copy_feedback
    }

    /// Borrow the prediction alongside a mutable explanation for orchestrator calls.
    pub fn prediction_and_explanation(&mut self) -> (&Prediction, &mut ExplanationState) {
        (&self.prediction, &mut self.explanation)
    }
}
