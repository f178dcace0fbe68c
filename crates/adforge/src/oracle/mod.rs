//! Text completion with retries.
//!
//! [`TextModel`] is a single blocking completion call. [`Oracle`] wraps a
//! model with the retry and backoff policy and never fails: once every
//! attempt is spent it hands back a sentinel the caller knows how to recover
//! from.

pub mod gemini;
pub mod parse;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, error, warn};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::RetryConfig;

pub use gemini::GeminiModel;
pub use parse::ParseError;

/// Status value of the object returned when structured completion gives up.
pub const STRUCTURED_FAILURE_STATUS: &str = "Error";

/// Sole item of the list returned when list completion gives up.
pub const LIST_FAILURE_MARKER: &str = "Generation failed";

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("response was blocked: {0}")]
    Blocked(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response had no text")]
    EmptyResponse,
}

/// How long to wait before the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Quota,
    Blocked,
    Other,
}

impl ModelError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ModelError::QuotaExceeded(_) => FailureKind::Quota,
            ModelError::Blocked(_) | ModelError::EmptyResponse => FailureKind::Blocked,
            ModelError::Status { status: 429, .. } => FailureKind::Quota,
            ModelError::Status { body, .. } | ModelError::Transport(body)
                if body.to_lowercase().contains("quota") =>
            {
                FailureKind::Quota
            }
            // The model backend itself is failing
            ModelError::Status { status, .. } if *status >= 500 => FailureKind::Blocked,
            ModelError::Status { .. } | ModelError::Transport(_) => FailureKind::Other,
        }
    }
}

/// A generative model that turns a prompt into text.
pub trait TextModel: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, ModelError>;

    fn name(&self) -> &str {
        "model"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub quota_backoff: Duration,
    pub blocked_backoff: Duration,
    pub call_interval: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            attempts: config.attempts.max(1),
            quota_backoff: Duration::from_secs(config.quota_backoff_secs),
            blocked_backoff: Duration::from_secs(config.blocked_backoff_secs),
            call_interval: Duration::from_millis(config.call_interval_millis),
        }
    }

    /// Same attempt count, no sleeping.
    pub fn immediate(attempts: u32) -> Self {
        Self {
            attempts: attempts.max(1),
            quota_backoff: Duration::ZERO,
            blocked_backoff: Duration::ZERO,
            call_interval: Duration::ZERO,
        }
    }

    fn backoff(&self, kind: FailureKind) -> Duration {
        match kind {
            FailureKind::Quota => self.quota_backoff,
            FailureKind::Blocked => self.blocked_backoff,
            FailureKind::Other => Duration::ZERO,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

pub struct Oracle {
    model: Arc<dyn TextModel>,
    policy: RetryPolicy,
}

impl Oracle {
    pub fn new(model: Arc<dyn TextModel>, policy: RetryPolicy) -> Self {
        Self { model, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// One JSON object from the response, or `{"status": "Error"}`.
    pub fn complete_structured(&self, prompt: &str) -> Map<String, Value> {
        self.with_retries("structured", prompt, parse::parse_object)
            .unwrap_or_else(|| {
                let mut sentinel = Map::new();
                sentinel.insert(
                    "status".to_string(),
                    Value::String(STRUCTURED_FAILURE_STATUS.to_string()),
                );
                sentinel
            })
    }

    /// A list of strings from the response, or `["Generation failed"]`.
    pub fn complete_list(&self, prompt: &str) -> Vec<String> {
        self.with_retries("list", prompt, parse::parse_string_list)
            .unwrap_or_else(|| vec![LIST_FAILURE_MARKER.to_string()])
    }

    /// Raw trimmed text, or `None` once retries are spent.
    pub fn run_prompt(&self, prompt: &str) -> Option<String> {
        self.with_retries("text", prompt, |text| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(ParseError::Malformed("empty text".to_string()))
            } else {
                Ok(trimmed.to_string())
            }
        })
    }

    fn with_retries<T>(
        &self,
        shape: &str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ParseError>,
    ) -> Option<T> {
        let attempts = self.policy.attempts;

        for attempt in 1..=attempts {
            let wait = match self.model.complete(prompt) {
                Ok(text) => match parse(&text) {
                    Ok(value) => {
                        sleep(self.policy.call_interval);
                        return Some(value);
                    }
                    Err(e) => {
                        warn!(
                            "{} returned unusable {} output (attempt {}/{}): {}",
                            self.model.name(),
                            shape,
                            attempt,
                            attempts,
                            e
                        );
                        debug!("Unusable output: {}", text);
                        Duration::ZERO
                    }
                },
                Err(e) => {
                    let kind = e.kind();
                    match kind {
                        FailureKind::Quota => error!(
                            "Quota exceeded on {} (attempt {}/{}), backing off: {}",
                            self.model.name(),
                            attempt,
                            attempts,
                            e
                        ),
                        FailureKind::Blocked => error!(
                            "{} blocked the response (attempt {}/{}): {}",
                            self.model.name(),
                            attempt,
                            attempts,
                            e
                        ),
                        FailureKind::Other => error!(
                            "{} call failed (attempt {}/{}): {}",
                            self.model.name(),
                            attempt,
                            attempts,
                            e
                        ),
                    }
                    self.policy.backoff(kind)
                }
            };

            if attempt < attempts {
                sleep(wait);
            }
        }

        error!(
            "Giving up on {} completion after {} attempts",
            shape, attempts
        );
        None
    }
}

fn sleep(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
