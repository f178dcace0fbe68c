//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use adforge::config::{Config, GenericCopies, ModelConfig, RetryConfig, UrlValidation};
use adforge::pipeline::PipelineConfig;
use adforge::prompts::Locale;

/// Builder for creating `Config` instances.
///
/// Retries are immediate so tests never sleep.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with sensible defaults for testing.
    pub fn new() -> Self {
        Self {
            config: Config {
                version: "1.0".to_string(),
                language: Locale::En,
                advertiser: "Acme".to_string(),
                country: "Mexico".to_string(),
                low_performance_mode: false,
                entry_delay_secs: 0,
                headlines_blacklist: vec![],
                headlines_regexp_blacklist: vec![],
                descriptions_blacklist: vec![],
                descriptions_regexp_blacklist: vec![],
                generic_copies: GenericCopies::default(),
                enable_feature_extraction: false,
                generate_paths: false,
                num_paths: 2,
                num_headlines: 5,
                num_descriptions: 3,
                url_validation: None,
                default_url: None,
                copy_retries: 2,
                size_enforcement_attempts: 5,
                model: ModelConfig::default(),
                retry: RetryConfig {
                    attempts: 2,
                    quota_backoff_secs: 0,
                    blocked_backoff_secs: 0,
                    call_interval_millis: 0,
                },
            },
        }
    }

    pub fn language(mut self, locale: Locale) -> Self {
        self.config.language = locale;
        self
    }

    pub fn headlines(mut self, count: usize) -> Self {
        self.config.num_headlines = count;
        self
    }

    pub fn descriptions(mut self, count: usize) -> Self {
        self.config.num_descriptions = count;
        self
    }

    /// Enable path generation with `count` parts.
    pub fn paths(mut self, count: usize) -> Self {
        self.config.generate_paths = true;
        self.config.num_paths = count;
        self
    }

    pub fn headlines_blacklist(mut self, phrases: &[&str]) -> Self {
        self.config.headlines_blacklist = phrases.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn headlines_regexp_blacklist(mut self, patterns: &[&str]) -> Self {
        self.config.headlines_regexp_blacklist = patterns.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn generic_headlines(mut self, copies: &[&str]) -> Self {
        self.config.generic_copies.headlines = copies.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn copy_retries(mut self, retries: u32) -> Self {
        self.config.copy_retries = retries;
        self
    }

    pub fn size_enforcement_attempts(mut self, attempts: u32) -> Self {
        self.config.size_enforcement_attempts = attempts;
        self
    }

    pub fn feature_extraction(mut self, enabled: bool) -> Self {
        self.config.enable_feature_extraction = enabled;
        self
    }

    pub fn url_validation(mut self, mode: UrlValidation, default_url: Option<&str>) -> Self {
        self.config.url_validation = Some(mode);
        self.config.default_url = default_url.map(str::to_string);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }

    pub fn pipeline_config(self) -> PipelineConfig {
        PipelineConfig::from_config(&self.config).expect("test config should be valid")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.config).expect("config should serialize")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
