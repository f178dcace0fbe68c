use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Stages of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStage {
    ReadingTerms,
    CheckingUrls,
    ExtractingFeatures,
    BuildingEntries,
    Generating,
    Validating,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunStage::ReadingTerms => "reading_terms",
            RunStage::CheckingUrls => "checking_urls",
            RunStage::ExtractingFeatures => "extracting_features",
            RunStage::BuildingEntries => "building_entries",
            RunStage::Generating => "generating",
            RunStage::Validating => "validating",
        };
        write!(f, "{}", s)
    }
}

/// Events emitted by the pipeline during a run.
pub enum ProgressEvent {
    Stage { stage: RunStage, message: String },
    /// Entries are about to be generated.
    Started { total: usize },
    /// An entry failed and was moved to the back of the queue.
    EntryRequeued { term: String },
    /// An entry is final. Requeued entries only count on their second pass.
    EntryCompleted { term: String },
    Finished { entries: usize },
    Failed { error: String },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Logs each event; used when stderr is not a terminal.
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Stage { stage, message } => log::info!("[{}] {}", stage, message),
            ProgressEvent::Started { total } => log::info!("Generating content for {} entries", total),
            ProgressEvent::EntryRequeued { term } => {
                log::info!("'{}' moved to the back of the queue", term)
            }
            ProgressEvent::EntryCompleted { term } => log::debug!("'{}' done", term),
            ProgressEvent::Finished { entries } => log::info!("Finished {} entries", entries),
            ProgressEvent::Failed { error } => log::error!("Run failed: {}", error),
        }
    }
}

/// Terminal progress bar over completed entries.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Stage { message, .. } => self.bar.set_message(message),
            ProgressEvent::Started { total } => {
                self.bar.set_length(total as u64);
                self.bar.set_position(0);
            }
            ProgressEvent::EntryRequeued { term } => {
                self.bar.set_message(format!("requeued '{}'", term))
            }
            ProgressEvent::EntryCompleted { term } => {
                self.bar.inc(1);
                self.bar.set_message(term);
            }
            ProgressEvent::Finished { entries } => self
                .bar
                .finish_with_message(format!("{} entries generated", entries)),
            ProgressEvent::Failed { error } => self.bar.abandon_with_message(error),
        }
    }
}
