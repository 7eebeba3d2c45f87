//! Debounce timer for the search box.
//!
//! Two states, held by the caller as `Option<PendingSearch>`: `None` is Idle,
//! `Some` is PendingDispatch. Each keystroke supersedes (never queues) the
//! previous pending dispatch.

use std::future::Future;
use std::time::Duration;

/// Fixed delay between the last keystroke and the search dispatch.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Handle to a scheduled-but-not-yet-fired search dispatch.
///
/// The caller keeps this and hands it back on the next keystroke so it can be
/// superseded. Dropping the handle does *not* cancel the timer; there is no
/// teardown cancellation, only a later `on_query_changed` call cancels it.
#[derive(Debug)]
pub struct PendingSearch {
    handle: tokio::task::JoinHandle<()>,
}

impl PendingSearch {
    fn cancel(self) {
        self.handle.abort();
    }

    /// Whether the dispatch already fired (or was cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Debounce-gated dispatcher for free-text search queries.
///
/// `dispatch` is the external search call; the dispatcher only decides *when*
/// it runs. At most one dispatch is issued per `delay` of typing inactivity.
pub struct SearchDispatcher<F> {
    delay: Duration,
    dispatch: F,
}

impl<F, Fut> SearchDispatcher<F>
where
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(dispatch: F) -> Self {
        Self::with_delay(dispatch, DEBOUNCE_DELAY)
    }

    /// Override the debounce window (tests use a controlled clock instead of
    /// shrinking this).
    pub fn with_delay(dispatch: F, delay: Duration) -> Self {
        Self { delay, dispatch }
    }

    /// Record a keystroke.
    ///
    /// Cancels the pending dispatch, if any, then schedules a new one for
    /// `query` after the debounce delay. The returned handle must be passed
    /// back on the next keystroke so it can be superseded in turn.
    pub fn on_query_changed(
        &self,
        query: impl Into<String>,
        pending: Option<PendingSearch>,
    ) -> PendingSearch {
        if let Some(pending) = pending {
            pending.cancel();
        }

        let query = query.into();
        let dispatch = self.dispatch.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(query = %query, "debounce window elapsed, dispatching search");
            dispatch(query).await;
        });

        PendingSearch { handle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    // Collect dispatched queries on an unbounded channel.
    fn probe() -> (
        impl Fn(String) -> std::pin::Pin<Box<dyn Future<Output = ()> + Send>> + Clone + Send + Sync,
        mpsc::UnboundedReceiver<String>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatch = move |query: String| {
            let tx = tx.clone();
            Box::pin(async move {
                let _ = tx.send(query);
            }) as std::pin::Pin<Box<dyn Future<Output = ()> + Send>>
        };
        (dispatch, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn dispatches_once_after_the_debounce_window() {
        let (dispatch, mut rx) = probe();
        let dispatcher = SearchDispatcher::new(dispatch);

        let pending = dispatcher.on_query_changed("iphone", None);
        assert!(!pending.is_finished());

        tokio::time::advance(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());
        assert!(!pending.is_finished());

        tokio::time::advance(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("iphone"));
        assert!(rx.try_recv().is_err());
        assert!(pending.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn second_keystroke_within_window_supersedes_the_first() {
        let (dispatch, mut rx) = probe();
        let dispatcher = SearchDispatcher::new(dispatch);

        let pending = dispatcher.on_query_changed("ip", None);
        tokio::time::advance(Duration::from_millis(200)).await;
        let _pending = dispatcher.on_query_changed("iphone", Some(pending));

        // Run well past both windows: only the second query fires.
        tokio::time::advance(Duration::from_millis(600)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("iphone"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_yields_exactly_one_dispatch_with_the_last_query() {
        let (dispatch, mut rx) = probe();
        let dispatcher = SearchDispatcher::new(dispatch);

        let mut pending = None;
        for query in ["i", "ip", "iph", "ipho", "iphon", "iphone"] {
            pending = Some(dispatcher.on_query_changed(query, pending.take()));
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("iphone"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_after_a_completed_dispatch_schedules_a_fresh_one() {
        let (dispatch, mut rx) = probe();
        let dispatcher = SearchDispatcher::new(dispatch);

        let pending = dispatcher.on_query_changed("ball", None);
        tokio::time::advance(Duration::from_millis(510)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("ball"));
        assert!(pending.is_finished());

        // A handle for an already-fired dispatch is harmless to supersede.
        let _pending = dispatcher.on_query_changed("bat", Some(pending));
        tokio::time::advance(Duration::from_millis(510)).await;
        assert_eq!(rx.recv().await.as_deref(), Some("bat"));
        assert!(rx.try_recv().is_err());
    }
}
