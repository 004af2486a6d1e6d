use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ArtifactRequest, Subsystem, VisionImage};
use crate::ports::{ArtifactRenderer, ExplanationService, VisionService};

type Prompts = Arc<Mutex<Vec<String>>>;

/// Order in which services were called, shared between fakes.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

/// Explanation service returning a canned answer and recording prompts.
#[derive(Clone)]
pub struct FakeExplanationService {
    answer: Result<Option<String>, String>,
    prompts: Prompts,
    calls: CallLog,
}

impl FakeExplanationService {
    pub fn answering(text: &str) -> Self {
        Self { answer: Ok(Some(text.to_string())), prompts: Prompts::default(), calls: CallLog::default() }
    }

    pub fn empty() -> Self {
        Self { answer: Ok(None), prompts: Prompts::default(), calls: CallLog::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { answer: Err(message.to_string()), prompts: Prompts::default(), calls: CallLog::default() }
    }

    pub fn with_log(mut self, calls: &CallLog) -> Self {
        self.calls = Arc::clone(calls);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ExplanationService for FakeExplanationService {
    fn generate_text(&self, prompt: &str) -> Result<Option<String>, AppError> {
        self.calls.lock().unwrap().push("explanation");
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer.clone().map_err(|message| AppError::remote(Subsystem::Explanation, message, None))
    }
}

/// Vision service returning fixed PNG-ish bytes or a failure.
#[derive(Clone)]
pub struct FakeVisionService {
    answer: Result<Vec<u8>, String>,
    prompts: Prompts,
    calls: CallLog,
}

impl FakeVisionService {
    pub fn returning(bytes: Vec<u8>) -> Self {
        Self { answer: Ok(bytes), prompts: Prompts::default(), calls: CallLog::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { answer: Err(message.to_string()), prompts: Prompts::default(), calls: CallLog::default() }
    }

    pub fn with_log(mut self, calls: &CallLog) -> Self {
        self.calls = Arc::clone(calls);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl VisionService for FakeVisionService {
    fn generate_image(&self, prompt: &str) -> Result<VisionImage, AppError> {
        self.calls.lock().unwrap().push("vision");
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.answer {
            Ok(bytes) => Ok(VisionImage { bytes: bytes.clone() }),
            Err(message) => Err(AppError::remote(Subsystem::Vision, message.clone(), None)),
        }
    }
}

/// Renderer that skips rasterizing and records what it was asked to draw.
#[derive(Clone)]
pub struct FakeRenderer {
    output: Option<Vec<u8>>,
    requests: Arc<Mutex<Vec<ArtifactRequest>>>,
}

impl FakeRenderer {
    pub fn producing(png: Vec<u8>) -> Self {
        Self { output: Some(png), requests: Arc::default() }
    }

    pub fn without_surface() -> Self {
        Self { output: None, requests: Arc::default() }
    }

    pub fn requests(&self) -> Vec<ArtifactRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ArtifactRenderer for FakeRenderer {
    fn render(&self, request: &ArtifactRequest) -> Result<Option<Vec<u8>>, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.output.clone())
    }
}
