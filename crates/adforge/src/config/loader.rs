use std::path::Path;

use crate::config::schema::{Config, UrlValidation};
use crate::error::ConfigError;
use crate::generation::blacklist::compile_pattern;

const SCHEMA_JSON: &str = include_str!("../../schema/config-v1.json");

/// Loads a config file. `.yaml`/`.yml` files are read as YAML, anything else as JSON.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        load_config_from_yaml_str(&content)
    } else {
        load_config_from_str(&content)
    }
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;
    load_config_from_value(json_value)
}

pub fn load_config_from_yaml_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_yaml::from_str(content)?;
    load_config_from_value(json_value)
}

fn load_config_from_value(json_value: serde_json::Value) -> Result<Config, ConfigError> {
    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| e.to_string())
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

pub(crate) fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.advertiser.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "advertiser must not be empty".to_string(),
        });
    }

    let patterns = [
        ("headlines_regexp_blacklist", &config.headlines_regexp_blacklist),
        (
            "descriptions_regexp_blacklist",
            &config.descriptions_regexp_blacklist,
        ),
    ];
    for (list, entries) in patterns {
        for pattern in entries {
            if let Err(e) = compile_pattern(pattern) {
                return Err(ConfigError::InvalidPattern {
                    list: list.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if config.url_validation == Some(UrlValidation::UseDefaultUrl)
        && config
            .default_url
            .as_deref()
            .map_or(true, |url| url.trim().is_empty())
    {
        return Err(ConfigError::Validation {
            message: "default_url is required when url_validation is USE_DEFAULT_URL".to_string(),
        });
    }

    let bounds = [
        ("num_headlines", config.num_headlines, 15),
        ("num_descriptions", config.num_descriptions, 4),
        ("num_paths", config.num_paths, 2),
    ];
    for (name, value, max) in bounds {
        if value > max {
            return Err(ConfigError::Validation {
                message: format!("{} must be at most {}, got {}", name, max, value),
            });
        }
    }

    if config.retry.attempts == 0 {
        return Err(ConfigError::Validation {
            message: "retry.attempts must be at least 1".to_string(),
        });
    }

    Ok(())
}
