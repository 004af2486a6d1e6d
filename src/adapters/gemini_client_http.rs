//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig, Subsystem, VisionImage};
use crate::ports::{ExplanationService, VisionService};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";
const NO_IMAGE_MESSAGE: &str = "No image data received from API";

/// HTTP transport for the Gemini API.
///
/// One request per call. Failures are returned as-is; nothing is retried.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    config: GeminiApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, config: config.clone(), client })
    }

    /// Create from `GEMINI_API_KEY` (or `API_KEY`) with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| AppError::EnvironmentVariableMissing("GEMINI_API_KEY".into()))?;

        Self::new(api_key, config)
    }

    fn endpoint(&self, model: &str) -> Result<Url, AppError> {
        let base = self.config.api_base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, model))
            .map_err(|e| AppError::config_error(format!("Invalid Gemini endpoint: {}", e)))
    }

    fn send_request(
        &self,
        subsystem: Subsystem,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AppError> {
        let url = self.endpoint(model)?;
        tracing::info!(%subsystem, model, "calling Gemini generateContent");

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::remote(subsystem, format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                AppError::remote(
                    subsystem,
                    format!("Failed to parse response: {}", e),
                    Some(status.as_u16()),
                )
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::remote(subsystem, message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()), inline_data: None }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl ExplanationService for HttpGeminiClient {
    fn generate_text(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let request = GenerateContentRequest::from_prompt(
            prompt,
            GenerationConfig {
                temperature: Some(self.config.temperature),
                top_p: Some(self.config.top_p),
                image_config: None,
            },
        );
        let response =
            self.send_request(Subsystem::Explanation, &self.config.text_model, &request)?;

        let text: String =
            response.first_parts().iter().filter_map(|part| part.text.as_deref()).collect();
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

impl VisionService for HttpGeminiClient {
    fn generate_image(&self, prompt: &str) -> Result<VisionImage, AppError> {
        let request = GenerateContentRequest::from_prompt(
            prompt,
            GenerationConfig {
                image_config: Some(ImageConfig { aspect_ratio: self.config.aspect_ratio.clone() }),
                ..GenerationConfig::default()
            },
        );
        let response = self.send_request(Subsystem::Vision, &self.config.image_model, &request)?;

        let inline = response
            .first_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .ok_or_else(|| AppError::remote(Subsystem::Vision, NO_IMAGE_MESSAGE, None))?;

        let bytes = STANDARD.decode(inline.data.trim()).map_err(|e| {
            AppError::remote(Subsystem::Vision, format!("Invalid inline image data: {}", e), None)
        })?;

        Ok(VisionImage { bytes })
    }
}
