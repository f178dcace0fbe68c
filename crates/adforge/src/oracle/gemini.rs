use std::time::Duration;

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{ModelError, TextModel};
use crate::config::ModelConfig;
use crate::error::ConfigError;

/// Environment variable checked before `model.api_key`.
pub const API_KEY_ENV: &str = "API_KEY";

/// Resolves the API key from the environment, then from config.
pub fn resolve_api_key(config: &ModelConfig) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(API_KEY_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(SecretString::from(trimmed));
        }
    }

    match config.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key.trim())),
        _ => Err(ConfigError::MissingApiKey),
    }
}

/// Blocking client for the `generateContent` endpoint.
pub struct GeminiModel {
    client: Client,
    url: String,
    api_key: SecretString,
    generation: GenerationSettings,
    name: String,
}

impl GeminiModel {
    pub fn new(config: &ModelConfig, api_key: SecretString) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.name
        );

        Ok(Self {
            client,
            url,
            api_key,
            generation: GenerationSettings {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
                max_output_tokens: config.max_output_tokens,
            },
            name: config.name.clone(),
        })
    }
}

impl TextModel for GeminiModel {
    fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation.clone(),
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::QuotaExceeded(body));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| ModelError::Transport(e.to_string()))?;
        body.into_text()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationSettings,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, ModelError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ModelError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyResponse)?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return match candidate.finish_reason {
                Some(reason) if reason != "STOP" => Err(ModelError::Blocked(reason)),
                _ => Err(ModelError::EmptyResponse),
            };
        }

        Ok(text)
    }
}
