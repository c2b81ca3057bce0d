//! Live state containers: `{data, loading, error}` per resource.
//!
//! An [`AsyncResource`] owns one resource's [`FetchState`] and knows how to
//! (re)fetch it for a dependency key. Views observe it through a `watch`
//! channel and never see an error returned: failures are stored as text in
//! `error`.
//!
//! Each fetch is tagged with the key it was issued for. When it settles after
//! the key has moved on, its result is dropped so the newer request decides
//! the final state.

pub mod poller;

pub use poller::Poller;

use crate::error::SdkError;

use async_lock::RwLock;
use futures_util::future::BoxFuture;
use futures_util::stream::Stream;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of one resource as a view sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_success(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        !self.loading && self.error.is_some()
    }
}

/// What happens to previously loaded data when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Leave the last good value in place.
    KeepData,
    /// Reset to the empty value, so stale rows from another key never show.
    ClearData,
}

type Fetcher<T, K> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<T, SdkError>> + Send + Sync>;

struct Inner<T, K> {
    fetch: Fetcher<T, K>,
    key: RwLock<K>,
    enabled: fn(&K) -> bool,
    on_error: OnError,
    state: watch::Sender<FetchState<T>>,
}

/// A resource container: one fetch function, one dependency key, one state.
///
/// Cloning yields another handle to the same container.
pub struct AsyncResource<T, K> {
    inner: Arc<Inner<T, K>>,
}

impl<T, K> Clone for AsyncResource<T, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, K> AsyncResource<T, K>
where
    T: Clone + Default + Send + Sync + 'static,
    K: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    pub fn new<F, Fut>(key: K, on_error: OnError, fetch: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        Self::gated(key, on_error, |_| true, fetch)
    }

    /// Like [`AsyncResource::new`], but keys for which `enabled` is false
    /// never trigger a fetch.
    pub fn gated<F, Fut>(key: K, on_error: OnError, enabled: fn(&K) -> bool, fetch: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, SdkError>> + Send + 'static,
    {
        let fetch: Fetcher<T, K> =
            Arc::new(move |k: K| -> BoxFuture<'static, Result<T, SdkError>> { Box::pin(fetch(k)) });
        let (state, _) = watch::channel(FetchState::default());
        Self {
            inner: Arc::new(Inner {
                fetch,
                key: RwLock::new(key),
                enabled,
                on_error,
                state,
            }),
        }
    }

    /// First fetch, when the consuming view mounts.
    pub async fn activate(&self) {
        self.refetch().await
    }

    /// Re-run the fetch for the current key.
    pub async fn refetch(&self) {
        let key = self.inner.key.read().await.clone();
        self.run(key).await
    }

    /// Change the dependency key. A different key triggers a fetch; the same
    /// key is a no-op.
    pub async fn set_key(&self, key: K) {
        {
            let mut current = self.inner.key.write().await;
            if *current == key {
                return;
            }
            *current = key.clone();
        }
        self.run(key).await
    }

    pub async fn key(&self) -> K {
        self.inner.key.read().await.clone()
    }

    /// Current snapshot.
    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    /// Change notifications; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.inner.state.subscribe()
    }

    /// Every state transition from now on, starting with the current one.
    pub fn changes(&self) -> impl Stream<Item = FetchState<T>> + Send + 'static {
        let mut rx = self.subscribe();
        async_stream::stream! {
            let first = rx.borrow_and_update().clone();
            yield first;
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                yield next;
            }
        }
    }

    async fn run(&self, key: K) {
        if !(self.inner.enabled)(&key) {
            tracing::debug!(key = ?key, "Fetch skipped for disabled key");
            return;
        }

        self.inner.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = (self.inner.fetch)(key.clone()).await;

        let current = self.inner.key.read().await.clone();
        if current != key {
            tracing::debug!(key = ?key, "Discarding response for superseded key");
            // A disabled key issues no fetch of its own, so nothing else
            // would settle the loading flag.
            if !(self.inner.enabled)(&current) {
                self.inner.state.send_modify(|s| s.loading = false);
            }
            return;
        }

        match result {
            Ok(data) => self.inner.state.send_modify(|s| {
                s.data = data;
                s.error = None;
                s.loading = false;
            }),
            Err(e) => {
                tracing::warn!(key = ?key, error = %e, "Fetch failed");
                let on_error = self.inner.on_error;
                self.inner.state.send_modify(|s| {
                    if on_error == OnError::ClearData {
                        s.data = T::default();
                    }
                    s.error = Some(e.to_string());
                    s.loading = false;
                });
            }
        }
    }
}
