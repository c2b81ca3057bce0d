//! Interval re-fetching for an [`AsyncResource`].
//!
//! The background task is owned by the [`Poller`]: dropping it (or calling
//! [`Poller::stop`]) aborts the task, so no fetch is issued after teardown.

use super::AsyncResource;

use std::fmt::Debug;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running poll loop.
pub struct Poller {
    every: Duration,
    task_handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the loop. The first fetch happens immediately, then once per
    /// `every`. Must be called inside a tokio runtime.
    pub fn start<T, K>(resource: AsyncResource<T, K>, every: Duration) -> Self
    where
        T: Clone + Default + Send + Sync + 'static,
        K: Clone + PartialEq + Debug + Send + Sync + 'static,
    {
        tracing::info!(every_ms = every.as_millis() as u64, "Starting poller");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                resource.refetch().await;
            }
        });

        Self {
            every,
            task_handle: Some(handle),
        }
    }

    pub fn every(&self) -> Duration {
        self.every
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Cancel the loop. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            tracing::info!("Stopping poller");
            handle.abort();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::live::OnError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_resource() -> (AsyncResource<usize, ()>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let r = AsyncResource::new((), OnError::KeepData, move |_| {
            let n = c.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok::<_, SdkError>(n) }
        });
        (r, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_immediately_then_every_interval() {
        let (resource, calls) = counting_resource();
        let poller = Poller::start(resource.clone(), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resource.state().data, 1);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fetch_after_drop() {
        let (resource, calls) = counting_resource();
        let poller = Poller::start(resource, Duration::from_secs(30));

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(poller);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (resource, calls) = counting_resource();
        let mut poller = Poller::start(resource, Duration::from_secs(30));
        tokio::time::sleep(Duration::from_millis(1)).await;

        poller.stop();
        poller.stop();
        assert!(!poller.is_running());

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
