//! Aggregate result of a bounded fan-out.

use crate::domain::WorkerError;

/// Result of a concurrent fan-out joined with a bounded wait.
///
/// A timed-out aggregate carries the items that completed in time with
/// `complete == false`; a timeout is never silently treated as full
/// completion. Sub-task errors are recorded in `errors` and do not abort
/// sibling tasks.
#[derive(Debug, Clone)]
pub struct FanOut<T> {
    pub items: Vec<T>,
    /// True when every sub-task finished before the deadline.
    pub complete: bool,
    /// Errors from individual sub-tasks, in completion order.
    pub errors: Vec<WorkerError>,
}

impl<T> FanOut<T> {
    /// An aggregate where every sub-task completed successfully.
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            complete: true,
            errors: Vec::new(),
        }
    }
}
