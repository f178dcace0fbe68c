pub mod task;

pub use task::{TaskEvent, TaskRecord, TaskRunner, TaskStatus};
