use std::collections::VecDeque;

use crate::entry::Entry;

use super::error::PipelineWarning;

/// Per-run parameters that are not part of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunRequest {
    /// Ask the model whether each term pair is related and only generate for related pairs.
    pub must_find_relationship: bool,
}

pub struct PipelineContext {
    pub request: RunRequest,

    // Entries waiting for (another) pass, front first
    pub queue: VecDeque<Entry>,

    // Entries that reached their final state, in completion order
    pub completed: Vec<Entry>,

    // How many entries were sent back once
    pub requeued: usize,

    // Non-fatal warnings
    pub warnings: Vec<PipelineWarning>,
}

impl PipelineContext {
    pub fn new(request: RunRequest, entries: Vec<Entry>) -> Self {
        Self {
            request,
            completed: Vec::with_capacity(entries.len()),
            queue: entries.into(),
            requeued: 0,
            warnings: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.queue.len() + self.completed.len()
    }
}

/// Outcome of a finished run.
pub struct RunOutput {
    pub entries: Vec<Entry>,
    pub requeued: usize,
    pub warnings: Vec<PipelineWarning>,
}
