//! Latest-only delivery of async results.
//!
//! A UI handler that starts a request calls [`LatestOnly::begin`], moves the returned
//! [`LatestOnlyUpdater`] into the spawned future, and later drains results on the UI thread
//! with [`LatestOnly::poll`].
//!
//! Every `begin` bumps a generation counter and cancels the token handed to the previous
//! request. A result is only ever surfaced by `poll` when its generation is still the latest,
//! so a slow response for an old query can never overwrite the response for a newer one,
//! regardless of completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

/// Receiving side, owned by the component that renders the results.
#[derive(Debug)]
pub struct LatestOnly<T> {
    name: &'static str,
    latest: Arc<AtomicU64>,
    send: Sender<(u64, T)>,
    recv: Receiver<(u64, T)>,
    in_flight: Option<CancellationToken>,
}

impl<T: Send + 'static> LatestOnly<T> {
    /// `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            name,
            latest: Arc::new(AtomicU64::new(0)),
            send,
            recv,
            in_flight: None,
        }
    }

    /// Starts a new request generation and supersedes the one in flight, if any.
    pub fn begin(&mut self) -> LatestOnlyUpdater<T> {
        if let Some(previous) = self.in_flight.take() {
            debug!("{}: cancelling superseded request", self.name);
            previous.cancel();
        }

        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());

        LatestOnlyUpdater {
            name: self.name,
            generation,
            latest: Arc::clone(&self.latest),
            send: self.send.clone(),
            cancel,
        }
    }

    /// Generation of the most recent [`LatestOnly::begin`] call, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// True between `begin` and the arrival of that generation's result.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Drains delivered results and returns the one belonging to the latest generation.
    pub fn poll(&mut self) -> Option<T> {
        let latest = self.generation();
        let mut result = None;

        while let Ok((generation, value)) = self.recv.try_recv() {
            if generation == latest {
                self.in_flight = None;
                result = Some(value);
            } else {
                warn!(
                    "{}: discarding stale result from generation {generation} (latest {latest})",
                    self.name
                );
            }
        }

        result
    }

    /// Abandons the request in flight; its result will be discarded.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
            self.latest.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Sending side, moved into the async task of a single request.
#[derive(Debug)]
pub struct LatestOnlyUpdater<T> {
    name: &'static str,
    generation: u64,
    latest: Arc<AtomicU64>,
    send: Sender<(u64, T)>,
    cancel: CancellationToken,
}

impl<T> LatestOnlyUpdater<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a newer request has been started.
    pub fn is_stale(&self) -> bool {
        self.latest.load(Ordering::SeqCst) != self.generation
    }

    /// Token cancelled when this request is superseded.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Delivers `value` unless the request is already stale. Returns whether it was sent.
    pub fn set(&self, value: T) -> bool {
        if self.is_stale() {
            debug!(
                "{}: dropping result of stale generation {}",
                self.name, self.generation
            );
            return false;
        }
        self.send.send((self.generation, value)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_result_of_latest_generation() {
        let mut latest = LatestOnly::<&str>::new("test");
        let updater = latest.begin();

        assert!(latest.is_in_flight());
        assert!(updater.set("page 1"));
        assert_eq!(latest.poll(), Some("page 1"));
        assert!(!latest.is_in_flight());
    }

    #[test]
    fn stale_updater_refuses_to_send() {
        let mut latest = LatestOnly::<u32>::new("test");
        let first = latest.begin();
        let second = latest.begin();

        assert!(first.is_stale());
        assert!(first.cancellation_token().is_cancelled());
        assert!(!first.set(1));

        assert!(second.set(2));
        assert_eq!(latest.poll(), Some(2));
    }

    #[test]
    fn result_sent_before_supersede_is_discarded() {
        let mut latest = LatestOnly::<u32>::new("test");
        let first = latest.begin();
        assert!(first.set(1));

        // A newer request starts before the UI drained the first result.
        let second = latest.begin();
        assert_eq!(latest.poll(), None);
        assert!(latest.is_in_flight());

        assert!(second.set(2));
        assert_eq!(latest.poll(), Some(2));
    }

    #[test]
    fn completion_order_does_not_matter() {
        let mut latest = LatestOnly::<&str>::new("test");
        let old = latest.begin();
        let new = latest.begin();

        assert!(new.set("new"));
        assert!(!old.set("old"));

        assert_eq!(latest.poll(), Some("new"));
        assert_eq!(latest.poll(), None);
    }

    #[test]
    fn cancel_discards_pending_result() {
        let mut latest = LatestOnly::<u32>::new("test");
        let updater = latest.begin();
        latest.cancel();

        assert!(updater.cancellation_token().is_cancelled());
        assert!(!updater.set(9));
        assert_eq!(latest.poll(), None);
        assert!(!latest.is_in_flight());
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut latest = LatestOnly::<()>::new("test");
        assert_eq!(latest.generation(), 0);

        let a = latest.begin();
        let b = latest.begin();
        assert_eq!(a.generation(), 1);
        assert_eq!(b.generation(), 2);
        assert_eq!(latest.generation(), 2);
    }
}
