use serde::{Deserialize, Serialize};

use crate::content::ContentKind;
use crate::prompts::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub language: Locale,
    pub advertiser: String,
    pub country: String,

    #[serde(default)]
    pub low_performance_mode: bool,
    #[serde(default = "default_entry_delay_secs")]
    pub entry_delay_secs: u64,

    #[serde(default)]
    pub headlines_blacklist: Vec<String>,
    #[serde(default)]
    pub headlines_regexp_blacklist: Vec<String>,
    #[serde(default)]
    pub descriptions_blacklist: Vec<String>,
    #[serde(default)]
    pub descriptions_regexp_blacklist: Vec<String>,

    #[serde(default)]
    pub generic_copies: GenericCopies,

    #[serde(default)]
    pub enable_feature_extraction: bool,
    #[serde(default)]
    pub generate_paths: bool,
    #[serde(default = "default_num_paths")]
    pub num_paths: usize,
    pub num_headlines: usize,
    pub num_descriptions: usize,

    #[serde(default)]
    pub url_validation: Option<UrlValidation>,
    #[serde(default)]
    pub default_url: Option<String>,

    #[serde(default = "default_copy_retries")]
    pub copy_retries: u32,
    #[serde(default = "default_size_enforcement_attempts")]
    pub size_enforcement_attempts: u32,

    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_entry_delay_secs() -> u64 {
    1
}

fn default_num_paths() -> usize {
    2
}

fn default_copy_retries() -> u32 {
    2
}

fn default_size_enforcement_attempts() -> u32 {
    5
}

/// What to do with primary-term URLs that do not answer a HEAD request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrlValidation {
    /// Replace the URL with an empty string.
    RemoveBrokenUrls,
    /// Replace the URL with `default_url`.
    UseDefaultUrl,
}

/// Copies used to fill slots the model could not fill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericCopies {
    #[serde(default)]
    pub headlines: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub paths: Vec<String>,
}

impl GenericCopies {
    pub fn for_kind(&self, kind: ContentKind) -> &[String] {
        match kind {
            ContentKind::Headline => &self.headlines,
            ContentKind::Description => &self.descriptions,
            ContentKind::Path => &self.paths,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model_name")]
    pub name: String,
    /// Used only when the `API_KEY` environment variable is unset.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model_name() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

fn default_top_p() -> f32 {
    0.8
}

fn default_top_k() -> u32 {
    40
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            name: default_model_name(),
            api_key: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    #[serde(default = "default_quota_backoff_secs")]
    pub quota_backoff_secs: u64,
    #[serde(default = "default_blocked_backoff_secs")]
    pub blocked_backoff_secs: u64,
    #[serde(default = "default_call_interval_millis")]
    pub call_interval_millis: u64,
}

fn default_attempts() -> u32 {
    5
}

fn default_quota_backoff_secs() -> u64 {
    60
}

fn default_blocked_backoff_secs() -> u64 {
    10
}

fn default_call_interval_millis() -> u64 {
    300
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            quota_backoff_secs: default_quota_backoff_secs(),
            blocked_backoff_secs: default_blocked_backoff_secs(),
            call_interval_millis: default_call_interval_millis(),
        }
    }
}
