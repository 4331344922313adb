use crate::domain::narrative::DEFAULT_TEMPERATURE;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Settings of the narrative text service.
///
/// A CSR bundle has no process environment, so the key is baked in at
/// build time through `option_env!`.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl NarrativeConfig {
    /// `GEMINI_API_KEY`, falling back to `API_KEY`
    pub fn from_build_env() -> Self {
        let key = option_env!("GEMINI_API_KEY").or(option_env!("API_KEY"));
        Self::default().with_api_key(key)
    }

    /// Blank keys count as missing
    pub fn with_api_key<S: Into<String>>(mut self, key: Option<S>) -> Self {
        self.api_key = key
            .map(Into::into)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}
