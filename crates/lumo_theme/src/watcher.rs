//! System color scheme watcher
//!
//! Polls the OS color scheme and emits changes into a [`SchemeSignal`].
//! Gated behind the `watcher` feature because it spawns a background
//! thread; headless and test hosts drive the signal directly instead.

use crate::platform::detect_system_color_scheme;
use crate::signal::SchemeSignal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Polling configuration
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Background poller forwarding OS scheme changes into a signal
///
/// Only changes are emitted; a steady OS scheme produces no signal
/// traffic.
pub struct SystemSchemeWatcher {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SystemSchemeWatcher {
    /// Spawn the polling thread
    pub fn spawn(signal: SchemeSignal, config: WatcherConfig) -> Self {
        let running = Arc::new(AtomicBool::new(true));

        let thread_running = running.clone();
        let handle = std::thread::spawn(move || {
            let mut last = signal.current();
            while thread_running.load(Ordering::SeqCst) {
                let detected = detect_system_color_scheme();
                if detected != last {
                    tracing::debug!(
                        "SystemSchemeWatcher - OS scheme changed from {:?} to {:?}",
                        last,
                        detected
                    );
                    signal.emit(detected);
                    last = detected;
                }
                std::thread::sleep(config.poll_interval);
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop polling; idempotent
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SystemSchemeWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
