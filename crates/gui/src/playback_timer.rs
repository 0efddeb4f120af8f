// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The timer that drives playback
//!

use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// A repeating timer owned by a single timeline widget.
///
/// The timer runs as a tokio task that sends a message every period (the
/// first one period after starting) and then calls its `wake` function, so
/// that the GUI repaints (and collects the tick) as soon as it fires.  Only
/// one task exists per timer: starting again replaces the running task, and
/// the task is aborted when the timer is stopped or dropped.
#[derive(Debug, Default)]
pub struct PlaybackTimer {
    task: Option<JoinHandle<()>>,
    rx: Option<UnboundedReceiver<()>>,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `period`, calling `wake` after each tick.  Must be
    /// called from within a tokio runtime.
    pub fn start(&mut self, period: Duration, wake: impl Fn() + Send + 'static) {
        self.stop();
        debug!("Starting playback timer ({}ms)", period.as_millis());
        let (tx, rx) = unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
                wake();
            }
        });
        self.task = Some(task);
        self.rx = Some(rx);
    }

    /// Stop ticking.  Ticks that haven't been collected are discarded.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping playback timer");
            task.abort();
        }
        self.rx = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// The number of ticks since this was last called (never blocks)
    pub fn poll_ticks(&mut self) -> usize {
        let Some(rx) = self.rx.as_mut() else {
            return 0;
        };
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        ticks
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
