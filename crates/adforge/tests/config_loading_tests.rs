//! Table-driven tests for configuration loading and validation.
//!
//! Covers JSON and YAML config files, the embedded schema and the semantic
//! checks that run after deserialization.

mod common;

use adforge::config::{load_config, load_config_from_str, load_config_from_yaml_str, UrlValidation};
use adforge::pipeline::PipelineConfig;
use adforge::prompts::Locale;
use common::{ConfigBuilder, TestHarness};

/// Represents a single config loading test case.
struct ConfigTestCase {
    /// Test case name for identification.
    name: &'static str,
    /// The config JSON content to test.
    config_json: &'static str,
    /// Whether loading should succeed.
    should_succeed: bool,
    /// Expected error substring (if should_succeed is false).
    expected_error: Option<&'static str>,
}

/// All JSON config loading test cases.
const JSON_CONFIG_TESTS: &[ConfigTestCase] = &[
    ConfigTestCase {
        name: "valid_minimal",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "valid_full",
        config_json: r#"{
            "version": "1.0",
            "language": "es",
            "advertiser": "Acme",
            "country": "Colombia",
            "low_performance_mode": true,
            "entry_delay_secs": 2,
            "headlines_blacklist": ["gratis"],
            "headlines_regexp_blacklist": ["Compra\\s+ya"],
            "descriptions_blacklist": [],
            "descriptions_regexp_blacklist": ["\\d+%"],
            "generic_copies": {
                "headlines": ["Ofertas para ti"],
                "descriptions": ["Encuentra lo que buscas en Acme"],
                "paths": ["ofertas"]
            },
            "enable_feature_extraction": true,
            "generate_paths": true,
            "num_paths": 2,
            "num_headlines": 15,
            "num_descriptions": 4,
            "url_validation": "USE_DEFAULT_URL",
            "default_url": "https://acme.example/",
            "copy_retries": 3,
            "size_enforcement_attempts": 4,
            "model": {
                "name": "gemini-1.5-flash",
                "temperature": 0.4,
                "timeout_secs": 30
            },
            "retry": {
                "attempts": 3,
                "quota_backoff_secs": 30
            }
        }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "invalid_version",
        config_json: r#"{
            "version": "2.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "invalid_missing_advertiser",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "country": "Mexico",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("advertiser"),
    },
    ConfigTestCase {
        name: "invalid_language",
        config_json: r#"{
            "version": "1.0",
            "language": "FR",
            "advertiser": "Acme",
            "country": "France",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "invalid_too_many_headlines",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "num_headlines": 16,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "invalid_unknown_key",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "num_headlines": 5,
            "num_descriptions": 3,
            "num_sitelinks": 4
        }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "invalid_regex",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "headlines_regexp_blacklist": ["(unclosed"],
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("headlines_regexp_blacklist"),
    },
    ConfigTestCase {
        name: "invalid_default_url_missing",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "Acme",
            "country": "Mexico",
            "url_validation": "USE_DEFAULT_URL",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("default_url is required"),
    },
    ConfigTestCase {
        name: "invalid_blank_advertiser",
        config_json: r#"{
            "version": "1.0",
            "language": "EN",
            "advertiser": "   ",
            "country": "Mexico",
            "num_headlines": 5,
            "num_descriptions": 3
        }"#,
        should_succeed: false,
        expected_error: Some("advertiser must not be empty"),
    },
    ConfigTestCase {
        name: "invalid_json",
        config_json: r#"{ "version": "1.0", "#,
        should_succeed: false,
        expected_error: Some("Failed to parse config JSON"),
    },
];

#[test]
fn test_json_config_loading() {
    for case in JSON_CONFIG_TESTS {
        let result = load_config_from_str(case.config_json);
        match (result, case.should_succeed) {
            (Ok(_), true) => {}
            (Ok(_), false) => panic!("[{}] expected failure but loading succeeded", case.name),
            (Err(e), true) => panic!("[{}] expected success but got: {}", case.name, e),
            (Err(e), false) => {
                if let Some(expected) = case.expected_error {
                    let message = e.to_string();
                    assert!(
                        message.contains(expected),
                        "[{}] error '{}' does not contain '{}'",
                        case.name,
                        message,
                        expected
                    );
                }
            }
        }
    }
}

#[test]
fn test_defaults_applied() {
    let config = load_config_from_str(JSON_CONFIG_TESTS[0].config_json).unwrap();
    assert_eq!(config.language, Locale::En);
    assert_eq!(config.num_paths, 2);
    assert_eq!(config.copy_retries, 2);
    assert_eq!(config.size_enforcement_attempts, 5);
    assert_eq!(config.retry.attempts, 5);
    assert_eq!(config.retry.quota_backoff_secs, 60);
    assert!(!config.generate_paths);
    assert!(config.url_validation.is_none());
    assert!(config.model.api_key.is_none());
}

#[test]
fn test_full_config_resolves_to_pipeline_config() {
    let config = load_config_from_str(JSON_CONFIG_TESTS[1].config_json).unwrap();
    assert_eq!(config.language, Locale::Es);
    assert_eq!(config.url_validation, Some(UrlValidation::UseDefaultUrl));

    let pipeline = PipelineConfig::from_config(&config).unwrap();
    assert_eq!(pipeline.entry_delay, Some(std::time::Duration::from_secs(2)));
    assert_eq!(pipeline.retry.attempts, 3);
    assert!(pipeline.blacklists.for_kind(adforge::ContentKind::Headline).unwrap().is_blocked("Producto GRATIS hoy"));
    assert!(pipeline.blacklists.for_kind(adforge::ContentKind::Headline).unwrap().is_blocked("Compra  ya"));
    assert!(pipeline.blacklists.for_kind(adforge::ContentKind::Path).is_none());
}

#[test]
fn test_yaml_config_file() {
    let harness = TestHarness::new();
    let path = harness.write(
        "config.yaml",
        r#"
version: "1.0"
language: pt
advertiser: Acme
country: Brasil
num_headlines: 3
num_descriptions: 3
generate_paths: true
url_validation: REMOVE_BROKEN_URLS
"#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.language, Locale::Pt);
    assert_eq!(config.url_validation, Some(UrlValidation::RemoveBrokenUrls));
    assert!(config.generate_paths);
}

#[test]
fn test_yaml_string_rejected_by_schema() {
    let result = load_config_from_yaml_str("version: \"1.0\"\nlanguage: EN\n");
    assert!(result.unwrap_err().to_string().contains("Schema validation failed"));
}

#[test]
fn test_builder_config_round_trips_through_file() {
    let harness = TestHarness::new();
    let builder = ConfigBuilder::new().headlines(7).paths(1);
    let path = harness.write_config(&builder);

    let config = load_config(&path).unwrap();
    assert_eq!(config.num_headlines, 7);
    assert_eq!(config.num_paths, 1);
    assert!(config.generate_paths);
    assert_eq!(config.retry.call_interval_millis, 0);
}

#[test]
fn test_missing_file() {
    let harness = TestHarness::new();
    let err = load_config(harness.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
