//! Single-slot background task runner for generation runs.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::{AdforgeError, TaskError};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// State of one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum TaskStatus {
    Running,
    Completed { entries: usize },
    Failed { error: String },
}

impl TaskStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, TaskStatus::Running)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Running => write!(f, "Running"),
            TaskStatus::Completed { entries } => write!(f, "Completed ({} entries)", entries),
            TaskStatus::Failed { error } => write!(f, "Failed: {}", error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: u64,
    pub status: TaskStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Broadcast on every status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvent {
    pub task_id: u64,
    pub status: TaskStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Default)]
struct TaskState {
    last_id: u64,
    tasks: HashMap<u64, TaskRecord>,
}

pub struct TaskRunner {
    state: Arc<Mutex<TaskState>>,
    events: broadcast::Sender<TaskEvent>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRunner {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(TaskState::default())),
            events,
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Spawns `job` on a worker thread and returns its task id right away.
    ///
    /// Rejected while the latest task is still running. `job` returns the
    /// number of entries produced.
    pub fn start<F>(&self, job: F) -> Result<u64, TaskError>
    where
        F: FnOnce() -> Result<usize, AdforgeError> + Send + 'static,
    {
        let id = {
            let mut state = lock(&self.state);
            if let Some(current) = state.tasks.get(&state.last_id) {
                if current.status.is_running() {
                    return Err(TaskError::AlreadyRunning(current.id));
                }
            }
            state.last_id += 1;
            let id = state.last_id;
            state.tasks.insert(
                id,
                TaskRecord {
                    id,
                    status: TaskStatus::Running,
                    started_at: Utc::now(),
                    finished_at: None,
                },
            );
            id
        };
        publish(&self.events, id, TaskStatus::Running);

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let spawned = thread::Builder::new()
            .name(format!("adforge-task-{}", id))
            .spawn(move || {
                debug!("Task {} started", id);
                let status = match panic::catch_unwind(AssertUnwindSafe(job)) {
                    Ok(Ok(entries)) => {
                        info!("Task {} completed with {} entries", id, entries);
                        TaskStatus::Completed { entries }
                    }
                    Ok(Err(e)) => {
                        error!("Task {} failed: {}", id, e);
                        TaskStatus::Failed {
                            error: e.to_string(),
                        }
                    }
                    Err(payload) => {
                        let reason = panic_message(payload.as_ref());
                        error!("Task {} panicked: {}", id, reason);
                        TaskStatus::Failed {
                            error: format!("task panicked: {}", reason),
                        }
                    }
                };
                finish(&state, &events, id, status);
            });

        match spawned {
            Ok(handle) => {
                lock(&self.handles).push(handle);
                Ok(id)
            }
            Err(e) => {
                let reason = e.to_string();
                finish(
                    &self.state,
                    &self.events,
                    id,
                    TaskStatus::Failed {
                        error: reason.clone(),
                    },
                );
                Err(TaskError::SpawnFailed(reason))
            }
        }
    }

    pub fn status(&self, id: u64) -> Result<TaskRecord, TaskError> {
        lock(&self.state)
            .tasks
            .get(&id)
            .cloned()
            .ok_or(TaskError::UnknownTask(id))
    }

    /// The most recently started task, if any.
    pub fn latest(&self) -> Option<TaskRecord> {
        let state = lock(&self.state);
        state.tasks.get(&state.last_id).cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TaskEvent> {
        self.events.subscribe()
    }

    /// Blocks until every spawned task thread has exited.
    pub fn wait_all(&self) {
        let handles: Vec<JoinHandle<()>> = lock(&self.handles).drain(..).collect();
        for handle in handles {
            if let Err(e) = handle.join() {
                error!("Task thread panicked: {:?}", e);
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn finish(
    state: &Mutex<TaskState>,
    events: &broadcast::Sender<TaskEvent>,
    id: u64,
    status: TaskStatus,
) {
    if let Some(record) = lock(state).tasks.get_mut(&id) {
        record.status = status.clone();
        record.finished_at = Some(Utc::now());
    }
    publish(events, id, status);
}

fn publish(events: &broadcast::Sender<TaskEvent>, id: u64, status: TaskStatus) {
    // No subscribers is fine
    let _ = events.send(TaskEvent {
        task_id: id,
        status,
        timestamp: Utc::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineError;
    use std::sync::mpsc;

    #[test]
    fn test_second_start_rejected_while_running() {
        let runner = TaskRunner::new();
        let (release_tx, release_rx) = mpsc::channel::<()>();

        let first = runner
            .start(move || {
                release_rx.recv().ok();
                Ok(3)
            })
            .unwrap();
        assert_eq!(first, 1);
        assert!(runner.status(first).unwrap().status.is_running());

        let second = runner.start(|| Ok(0));
        assert!(matches!(second, Err(TaskError::AlreadyRunning(1))));

        release_tx.send(()).unwrap();
        runner.wait_all();

        let record = runner.status(first).unwrap();
        assert_eq!(record.status, TaskStatus::Completed { entries: 3 });
        assert!(record.finished_at.is_some());
    }

    #[test]
    fn test_ids_increase_after_completion() {
        let runner = TaskRunner::new();
        let first = runner.start(|| Ok(1)).unwrap();
        runner.wait_all();
        let second = runner.start(|| Ok(2)).unwrap();
        runner.wait_all();

        assert!(second > first);
        assert_eq!(runner.latest().unwrap().id, second);
    }

    #[test]
    fn test_failed_task_keeps_message() {
        let runner = TaskRunner::new();
        let id = runner
            .start(|| Err(PipelineError::InvalidRequest("no terms".into()).into()))
            .unwrap();
        runner.wait_all();

        match runner.status(id).unwrap().status {
            TaskStatus::Failed { error } => assert!(error.contains("no terms")),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_panicking_job_fails_and_frees_slot() {
        let runner = TaskRunner::new();
        let id = runner
            .start(|| -> Result<usize, AdforgeError> { panic!("boom") })
            .unwrap();
        runner.wait_all();

        let record = runner.status(id).unwrap();
        match record.status {
            TaskStatus::Failed { error } => assert!(error.contains("boom"), "{}", error),
            other => panic!("unexpected status {:?}", other),
        }
        assert!(record.finished_at.is_some());

        let next = runner.start(|| Ok(0)).unwrap();
        runner.wait_all();
        assert_eq!(
            runner.status(next).unwrap().status,
            TaskStatus::Completed { entries: 0 }
        );
    }

    #[test]
    fn test_unknown_task() {
        let runner = TaskRunner::new();
        assert!(matches!(runner.status(42), Err(TaskError::UnknownTask(42))));
        assert!(runner.latest().is_none());
    }

    #[test]
    fn test_events_broadcast_transitions() {
        let runner = TaskRunner::new();
        let mut rx = runner.subscribe();
        let id = runner.start(|| Ok(5)).unwrap();
        runner.wait_all();

        let running = rx.try_recv().unwrap();
        assert_eq!(running.task_id, id);
        assert_eq!(running.status, TaskStatus::Running);

        let done = rx.try_recv().unwrap();
        assert_eq!(done.status, TaskStatus::Completed { entries: 5 });
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TaskStatus::Failed {
            error: "boom".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"state":"failed","error":"boom"}"#);
    }
}
