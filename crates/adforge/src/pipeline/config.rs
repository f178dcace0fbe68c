use std::time::Duration;

use crate::config::{Config, GenericCopies, UrlValidation};
use crate::error::ConfigError;
use crate::generation::Blacklists;
use crate::oracle::RetryPolicy;
use crate::prompts::Locale;

/// Resolved, validated settings for one pipeline.
pub struct PipelineConfig {
    pub locale: Locale,
    pub advertiser: String,
    pub country: String,
    pub num_headlines: usize,
    pub num_descriptions: usize,
    pub num_paths: usize,
    pub generate_paths: bool,
    pub enable_feature_extraction: bool,
    pub url_validation: Option<UrlValidation>,
    pub default_url: Option<String>,
    /// Pause after each entry; set in low performance mode.
    pub entry_delay: Option<Duration>,
    pub copy_retries: u32,
    pub size_enforcement_attempts: u32,
    pub retry: RetryPolicy,
    pub blacklists: Blacklists,
    pub generic_copies: GenericCopies,
}

impl PipelineConfig {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            locale: config.language,
            advertiser: config.advertiser.clone(),
            country: config.country.clone(),
            num_headlines: config.num_headlines,
            num_descriptions: config.num_descriptions,
            num_paths: config.num_paths,
            generate_paths: config.generate_paths,
            enable_feature_extraction: config.enable_feature_extraction,
            url_validation: config.url_validation,
            default_url: config.default_url.clone(),
            entry_delay: config
                .low_performance_mode
                .then(|| Duration::from_secs(config.entry_delay_secs)),
            copy_retries: config.copy_retries,
            size_enforcement_attempts: config.size_enforcement_attempts,
            retry: RetryPolicy::from_config(&config.retry),
            blacklists: Blacklists::from_config(config)?,
            generic_copies: config.generic_copies.clone(),
        })
    }
}
