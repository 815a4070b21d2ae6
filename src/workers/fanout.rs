//! Bounded concurrent fan-out over a collection of sub-tasks.

use std::future::Future;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::ports::FanOut;

/// Wall-clock bound on a fan-out join.
pub const FAN_OUT_TIMEOUT: Duration = Duration::from_secs(120);

/// Drives `tasks` concurrently and joins them with a bounded wait.
///
/// A sub-task error is recorded and does not abort siblings. When the
/// deadline elapses first, the aggregate carries whatever completed in time
/// with `complete == false`; a timeout is never reported as full completion.
/// No completion order is guaranteed among siblings.
pub async fn join_bounded<T, F, E>(tasks: Vec<F>, deadline: Duration) -> FanOut<T>
where
    F: Future<Output = Result<T, E>> + Send,
    E: Into<crate::domain::WorkerError>,
{
    let total = tasks.len();
    let mut pending: FuturesUnordered<F> = tasks.into_iter().collect();
    let sleep = tokio::time::sleep(deadline);
    tokio::pin!(sleep);

    let mut items = Vec::with_capacity(total);
    let mut errors = Vec::new();

    loop {
        tokio::select! {
            biased;
            next = pending.next() => match next {
                Some(Ok(item)) => items.push(item),
                Some(Err(e)) => {
                    let err = e.into();
                    tracing::warn!("fan-out sub-task failed: {err}");
                    errors.push(err);
                }
                None => {
                    return FanOut { items, complete: true, errors };
                }
            },
            _ = &mut sleep => {
                tracing::warn!(
                    completed = items.len() + errors.len(),
                    total,
                    "fan-out timed out, returning partial results"
                );
                return FanOut { items, complete: false, errors };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkerError;

    #[tokio::test]
    async fn all_tasks_complete_marks_aggregate_complete() {
        let tasks: Vec<_> = (0..5)
            .map(|i| async move { Ok::<_, WorkerError>(i) })
            .collect();

        let result = join_bounded(tasks, Duration::from_secs(1)).await;

        assert!(result.complete);
        assert_eq!(result.items.len(), 5);
        assert!(result.errors.is_empty());
    }

    #[tokio::test]
    async fn sub_task_error_does_not_abort_siblings() {
        let tasks: Vec<_> = (0..4)
            .map(|i| async move {
                if i == 2 {
                    Err(WorkerError::failure("one bad bucket"))
                } else {
                    Ok(i)
                }
            })
            .collect();

        let result = join_bounded(tasks, Duration::from_secs(1)).await;

        assert!(result.complete);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.errors.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_returns_partial_results_flagged_incomplete() {
        let fast = async { Ok::<_, WorkerError>("fast") };
        let slow = async {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok("slow")
        };
        let tasks = vec![
            Box::pin(fast) as std::pin::Pin<Box<dyn Future<Output = _> + Send>>,
            Box::pin(slow),
        ];

        let result = join_bounded(tasks, FAN_OUT_TIMEOUT).await;

        assert!(!result.complete);
        assert_eq!(result.items, vec!["fast"]);
    }

    #[tokio::test]
    async fn empty_task_list_is_trivially_complete() {
        let tasks: Vec<std::pin::Pin<Box<dyn Future<Output = Result<u32, WorkerError>> + Send>>> =
            Vec::new();
        let result = join_bounded(tasks, Duration::from_secs(1)).await;
        assert!(result.complete);
        assert!(result.items.is_empty());
    }
}
