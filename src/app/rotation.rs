// Showroom - app/rotation.rs
//
// Timed carousel rotation: a background thread that emits a tick every
// interval until cancelled. The thread never touches carousel state; the
// owner applies ticks to its `Carousel` on its own thread, so ticks and
// manual navigation cannot race.
//
// Lifecycle: `start` spawns, `stop` cancels, and dropping the timer stops it.
// After `stop` the receiver stays open until the thread reports `Stopped`
// (see `wait_stopped`) or the next `start` replaces it.

use crate::util::constants::ROTATION_CANCEL_CHECK_INTERVAL_MS;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

/// Messages sent from the rotation thread to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationTick {
    /// One interval elapsed; advance the carousel. `sequence` starts at 1.
    Advance { sequence: u64 },
    /// The thread observed cancellation and exited.
    Stopped,
}

/// Owner handle for the rotation thread.
#[derive(Debug)]
pub struct RotationTimer {
    /// Receiver for tick messages from the background thread.
    tick_rx: Option<mpsc::Receiver<RotationTick>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl RotationTimer {
    pub fn new() -> Self {
        Self {
            tick_rx: None,
            cancel_flag: None,
        }
    }

    /// Start ticking every `interval`. A running timer is stopped first.
    /// A zero interval is treated as one millisecond.
    pub fn start(&mut self, interval: Duration) {
        self.stop();
        let interval = interval.max(Duration::from_millis(1));

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.tick_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_rotation(interval, tx, cancel);
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Rotation started");
    }

    /// Request the background thread to stop.
    ///
    /// The thread exits within `ROTATION_CANCEL_CHECK_INTERVAL_MS` and sends
    /// a final `RotationTick::Stopped`, still readable through `poll`/`wait`.
    pub fn stop(&mut self) {
        if let Some(flag) = self.cancel_flag.take() {
            flag.store(true, Ordering::SeqCst);
            tracing::debug!("Rotation stop requested");
        }
    }

    /// Stop the thread and block until it confirms with `Stopped`.
    ///
    /// Ticks still in flight are discarded. Returns `false` if no
    /// confirmation arrived within `timeout` (or no thread was ever started).
    /// The receiver is released either way.
    pub fn wait_stopped(&mut self, timeout: Duration) -> bool {
        self.stop();
        let Some(rx) = self.tick_rx.take() else {
            return false;
        };

        let deadline = std::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(RotationTick::Stopped) => {
                    tracing::debug!("Rotation thread exited");
                    return true;
                }
                Ok(RotationTick::Advance { .. }) => continue,
                Err(_) => return false,
            }
        }
    }

    /// Returns `true` if a rotation thread is currently active.
    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Drain all queued ticks without blocking.
    pub fn poll(&self) -> Vec<RotationTick> {
        let mut ticks = Vec::new();
        if let Some(ref rx) = self.tick_rx {
            while let Ok(tick) = rx.try_recv() {
                ticks.push(tick);
            }
        }
        ticks
    }

    /// Block until the next tick or `timeout`, whichever comes first.
    pub fn wait(&self, timeout: Duration) -> Option<RotationTick> {
        self.tick_rx.as_ref()?.recv_timeout(timeout).ok()
    }
}

impl Default for RotationTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background loop: sleep in cancel-check slices, then send a tick.
fn run_rotation(interval: Duration, tx: mpsc::Sender<RotationTick>, cancel: Arc<AtomicBool>) {
    let slice = Duration::from_millis(ROTATION_CANCEL_CHECK_INTERVAL_MS).min(interval);
    let mut sequence = 0u64;

    loop {
        let mut slept = Duration::ZERO;
        while slept < interval {
            let step = slice.min(interval - slept);
            std::thread::sleep(step);
            slept += step;
            if cancel.load(Ordering::SeqCst) {
                let _ = tx.send(RotationTick::Stopped);
                return;
            }
        }

        sequence += 1;
        if tx.send(RotationTick::Advance { sequence }).is_err() {
            // Owner dropped the receiver; nothing left to notify.
            return;
        }
    }
}
