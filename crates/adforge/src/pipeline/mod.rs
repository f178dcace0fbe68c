pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod runner;

pub use config::PipelineConfig;
pub use context::{PipelineContext, RunOutput, RunRequest};
pub use error::{PipelineError, PipelineWarning};
pub use progress::{BarProgress, LogProgress, NoopProgress, ProgressEvent, ProgressReporter, RunStage};
pub use runner::{normalize_term, Pipeline};
