use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdforgeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Term source error: {0}")]
    Source(#[from] SourceError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Model error: {0}")]
    Model(#[from] crate::oracle::ModelError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::pipeline::PipelineError),

    #[error("Task error: {0}")]
    Task(#[from] TaskError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Failed to parse config YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("Invalid blacklist pattern in '{list}' ('{pattern}'): {reason}")]
    InvalidPattern {
        list: String,
        pattern: String,
        reason: String,
    },

    #[error("Missing API key: set API_KEY or model.api_key")]
    MissingApiKey,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read term file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse term file '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Column '{column}' has {actual} values but there are {expected} terms")]
    ColumnLength {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task {0} is still running")]
    AlreadyRunning(u64),

    #[error("Failed to spawn task thread: {0}")]
    SpawnFailed(String),

    #[error("Unknown task {0}")]
    UnknownTask(u64),

    #[error("Task {id} failed: {error}")]
    Failed { id: u64, error: String },
}

pub type Result<T> = std::result::Result<T, AdforgeError>;
