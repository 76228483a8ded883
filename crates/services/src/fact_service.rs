use std::time::Duration;

use learnify_core::fact::{FACT_SYSTEM_INSTRUCTION, fact_query};
use learnify_core::model::Topic;
use learnify_core::FactOutcome;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::FactError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const API_KEY_VAR: &str = "LEARNIFY_AI_API_KEY";
pub const BASE_URL_VAR: &str = "LEARNIFY_AI_BASE_URL";
pub const MODEL_VAR: &str = "LEARNIFY_AI_MODEL";
pub const TIMEOUT_SECS_VAR: &str = "LEARNIFY_AI_TIMEOUT_SECS";

const FACT_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone, Debug)]
pub struct FactServiceConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl FactServiceConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build the configuration from `LEARNIFY_AI_*` settings, falling back to defaults
    /// for anything missing. An unparsable or zero timeout uses the default.
    ///
    /// Returns `None` when the API key is missing or blank.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty())?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        if let Some(secs) = lookup(TIMEOUT_SECS_VAR)
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Asks the text-generation API for one child-friendly fun fact.
#[derive(Clone)]
pub struct FactService {
    client: Client,
    config: Option<FactServiceConfig>,
}

impl FactService {
    #[must_use]
    pub fn new(config: Option<FactServiceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Request a fun fact about `topic`.
    ///
    /// # Errors
    ///
    /// Returns `FactError` when the service is disabled, the request fails or
    /// times out, the status is not 2xx, the body is not JSON, or no fact text
    /// can be found in the response.
    pub async fn generate(&self, topic: &Topic) -> Result<String, FactError> {
        let config = self.config.as_ref().ok_or(FactError::Disabled)?;
        let payload = GenerateRequest::for_topic(topic);

        let response = self
            .client
            .post(config.endpoint())
            .header(API_KEY_HEADER, config.api_key.as_str())
            .timeout(config.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FactError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        extract_fact(&value).ok_or(FactError::EmptyResponse)
    }

    /// Like [`FactService::generate`], but collapses every error into the
    /// outcome shown to the learner. Errors are logged here and go no further.
    pub async fn fetch_outcome(&self, topic: &Topic) -> FactOutcome {
        match self.generate(topic).await {
            Ok(text) => FactOutcome::Fact(text),
            Err(FactError::EmptyResponse) => {
                tracing::info!(topic = topic.title(), "fact response had no text");
                FactOutcome::Empty
            }
            Err(err) => {
                tracing::warn!(topic = topic.title(), error = %err, "fun fact request failed");
                FactOutcome::Failed
            }
        }
    }
}

fn extract_fact(value: &Value) -> Option<String> {
    value
        .pointer(FACT_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    system_instruction: RequestContent,
}

impl GenerateRequest {
    fn for_topic(topic: &Topic) -> Self {
        Self {
            contents: vec![RequestContent::text(fact_query(topic))],
            system_instruction: RequestContent::text(FACT_SYSTEM_INSTRUCTION.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

impl RequestContent {
    fn text(text: String) -> Self {
        Self {
            parts: vec![RequestPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}
