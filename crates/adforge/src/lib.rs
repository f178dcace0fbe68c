pub mod config;
pub mod content;
pub mod entry;
pub mod error;
pub mod export;
pub mod generation;
pub mod oracle;
pub mod pipeline;
pub mod prompts;
pub mod sources;
pub mod url_check;
pub mod validation;
pub mod worker;

pub use config::{load_config, Config};
pub use content::{ContentKind, GENERATION_ERROR, REVIEW_PREFIX};
pub use entry::Entry;
pub use error::{AdforgeError, ConfigError, ExportError, Result, SourceError, TaskError};
pub use export::{EntrySink, JsonFileSink};
pub use oracle::{GeminiModel, ModelError, Oracle, RetryPolicy, TextModel};
pub use pipeline::{Pipeline, PipelineConfig, PipelineContext, RunOutput, RunRequest};
pub use prompts::{Locale, PromptSelector};
pub use sources::{FileTermSource, StaticTermSource, TermColumns, TermSource};
pub use worker::{TaskRunner, TaskStatus};
