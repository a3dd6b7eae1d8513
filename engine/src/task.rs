//! Delayed completion tasks.
//!
//! A [`CompletionTask`] is the only asynchronous piece of the pipeline: it
//! resolves to its record id once its delay has elapsed. The future never
//! borrows the pipeline, so each task runs on its own and tasks resolve in
//! whatever order their delays dictate. A task cannot be cancelled.

use futures::future::LocalBoxFuture;
use std::future::Future;
use std::time::Duration;

use crate::models::RecordId;

/// Platform timer.
pub trait Timer {
    /// A future resolving after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

impl<T: Timer + ?Sized> Timer for &T {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        (**self).sleep(duration)
    }
}

/// Tokio-backed timer for native builds.
#[cfg(feature = "native")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTimer;

#[cfg(feature = "native")]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// A scheduled `pending -> completed` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTask {
    pub id: RecordId,
    pub delay: Duration,
}

impl CompletionTask {
    pub fn new(id: RecordId, delay: Duration) -> Self {
        Self { id, delay }
    }

    /// Start the timer now; the returned future yields the record id.
    pub fn complete_after<T: Timer + ?Sized>(
        self,
        timer: &T,
    ) -> impl Future<Output = RecordId> + 'static {
        let sleep = timer.sleep(self.delay);
        let id = self.id;
        async move {
            sleep.await;
            id
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use futures::stream::{FuturesUnordered, StreamExt};

    #[tokio::test(start_paused = true)]
    async fn test_resolves_to_id_after_delay() {
        let start = tokio::time::Instant::now();
        let task = CompletionTask::new(RecordId::from("r1"), Duration::from_millis(2500));

        let id = task.complete_after(&TokioTimer).await;

        assert_eq!(id, RecordId::from("r1"));
        assert!(start.elapsed() >= Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tasks_resolve_by_delay_not_submission() {
        let tasks = vec![
            CompletionTask::new(RecordId::from("slow"), Duration::from_secs(4)),
            CompletionTask::new(RecordId::from("fast"), Duration::from_secs(2)),
            CompletionTask::new(RecordId::from("mid"), Duration::from_secs(3)),
        ];

        let mut pending: FuturesUnordered<_> =
            tasks.into_iter().map(|t| t.complete_after(&TokioTimer)).collect();

        let mut order = Vec::new();
        while let Some(id) = pending.next().await {
            order.push(id.to_string());
        }
        assert_eq!(order, vec!["fast", "mid", "slow"]);
    }
}
