use std::future::Future;

use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Bookkeeping for detached poster-backfill lookups.
///
/// Lookups run concurrently and complete in no particular order. Tracking them
/// in a [`JoinSet`] gives callers a way to drain outstanding work
/// ([`wait`](Self::wait)) and guarantees that dropping the tracker aborts
/// whatever is still in flight, so a torn-down engine can never be written to
/// by a late completion.
#[derive(Default)]
pub struct BackfillTracker {
    tasks: Mutex<JoinSet<()>>,
}

impl BackfillTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a backfill future onto the tracked set.
    pub async fn track<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().await;
        tasks.spawn(fut);
    }

    /// Wait for every outstanding backfill task to finish. Task panics are
    /// logged and swallowed; backfill is best-effort throughout.
    pub async fn wait(&self) {
        let mut tasks = self.tasks.lock().await;
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                if !e.is_cancelled() {
                    tracing::warn!(error = %e, "Backfill task failed");
                }
            }
        }
    }

    pub async fn pending(&self) -> usize {
        self.tasks.lock().await.len()
    }
}
