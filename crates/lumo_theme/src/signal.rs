//! OS color scheme signal
//!
//! A shared carrier of the operating system's reported color scheme.
//! Producers (the platform watcher, diagnostics) emit into it; consumers
//! subscribe for synchronous change callbacks. There is no queue: the
//! latest emitted value wins and is what `current()` reports.

use crate::scheme::ColorScheme;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type SchemeCallback = Arc<dyn Fn(ColorScheme) + Send + Sync>;

struct SignalInner {
    current: RwLock<ColorScheme>,
    subscribers: Mutex<FxHashMap<u64, SchemeCallback>>,
    next_id: AtomicU64,
}

/// Shared carrier of the OS-reported color scheme
///
/// Cloning yields another handle to the same signal.
#[derive(Clone)]
pub struct SchemeSignal {
    inner: Arc<SignalInner>,
}

impl SchemeSignal {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            inner: Arc::new(SignalInner {
                current: RwLock::new(initial),
                subscribers: Mutex::new(FxHashMap::default()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// The latest emitted scheme
    pub fn current(&self) -> ColorScheme {
        *self.inner.current.read().unwrap()
    }

    /// Record a new scheme and notify subscribers synchronously
    ///
    /// The subscriber list is snapshotted before invocation so callbacks
    /// may subscribe or release without deadlocking.
    pub fn emit(&self, scheme: ColorScheme) {
        *self.inner.current.write().unwrap() = scheme;

        let snapshot: Vec<SchemeCallback> = self
            .inner
            .subscribers
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for callback in snapshot {
            callback(scheme);
        }
    }

    /// Register a change callback
    ///
    /// The returned guard is the only way to release the registration;
    /// dropping it releases too.
    pub fn subscribe<F>(&self, callback: F) -> SchemeSubscription
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .insert(id, Arc::new(callback));
        SchemeSubscription {
            signal: Arc::downgrade(&self.inner),
            id,
            released: AtomicBool::new(false),
        }
    }

    /// Number of live registrations
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }
}

impl Default for SchemeSignal {
    fn default() -> Self {
        Self::new(ColorScheme::Light)
    }
}

/// Guard for one signal registration
///
/// The registration is released exactly once, through `release()` or
/// through `Drop`, whichever comes first; later calls are no-ops. The
/// guard holds the signal weakly, so it stays safe to release after the
/// signal itself is gone.
pub struct SchemeSubscription {
    signal: Weak<SignalInner>,
    id: u64,
    released: AtomicBool,
}

impl SchemeSubscription {
    /// Unhook the callback; idempotent
    pub fn release(&self) {
        if self.released.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(inner) = self.signal.upgrade() {
            inner.subscribers.lock().unwrap().remove(&self.id);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn emit_reaches_subscribers_and_updates_current() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        let _sub = signal.subscribe(move |scheme| {
            seen_clone.lock().unwrap().push(scheme);
        });

        signal.emit(ColorScheme::Dark);
        signal.emit(ColorScheme::Light);

        assert_eq!(signal.current(), ColorScheme::Light);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![ColorScheme::Dark, ColorScheme::Light]
        );
    }

    #[test]
    fn release_stops_delivery() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        let sub = signal.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(ColorScheme::Dark);
        sub.release();
        signal.emit(ColorScheme::Light);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn double_release_is_a_no_op() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let sub = signal.subscribe(|_| {});

        sub.release();
        sub.release();

        assert!(sub.is_released());
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn drop_releases_the_registration() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        {
            let _sub = signal.subscribe(|_| {});
            assert_eq!(signal.subscriber_count(), 1);
        }
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn release_after_signal_is_gone_is_safe() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        sub.release();
        assert!(sub.is_released());
    }

    #[test]
    fn signal_handles_share_state() {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let clone = signal.clone();

        clone.emit(ColorScheme::Dark);
        assert_eq!(signal.current(), ColorScheme::Dark);
    }
}
