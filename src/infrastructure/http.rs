use crate::domain::{
    errors::{NarrativeError, NarrativeResult},
    logging::{LogComponent, LogLevel, get_logger},
    narrative::{NarrativeGenerator, NarrativePrompt},
};
use crate::infrastructure::config::NarrativeConfig;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// `generateContent` request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &NarrativePrompt) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: prompt.system_instruction.clone() }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt.prompt.clone() }],
            }],
            generation_config: GenerationConfig { temperature: prompt.temperature },
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; `None` when blank
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// HTTP client for the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiHttpClient {
    config: NarrativeConfig,
}

impl GeminiHttpClient {
    pub fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Self {
        Self::new(NarrativeConfig::from_build_env())
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    fn service_failure(context: &str, detail: impl std::fmt::Debug) -> NarrativeError {
        NarrativeError::ServiceFailure(format!("{context}: {detail:?}"))
    }
}

impl NarrativeGenerator for GeminiHttpClient {
    async fn generate(&self, prompt: &NarrativePrompt) -> NarrativeResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(NarrativeError::ConfigurationMissing)?;

        let url = self.config.generate_content_url();
        let mut body = GenerateContentRequest::from_prompt(prompt);
        body.generation_config.temperature = self.config.temperature;

        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("GeminiHttpClient"),
            &format!("📡 POST {url}"),
            &format!("temperature={}", body.generation_config.temperature),
        );

        let response = Request::post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .map_err(|e| Self::service_failure("Failed to encode request", e))?
            .send()
            .await
            .map_err(|e| Self::service_failure("Failed to send request", e))?;

        if !response.ok() {
            return Err(NarrativeError::ServiceFailure(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Self::service_failure("Failed to parse JSON", e))?;

        payload
            .text()
            .ok_or_else(|| NarrativeError::ServiceFailure("empty response".to_string()))
    }
}
