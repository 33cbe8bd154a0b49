//! Ticker: Background clock for hosts that have no UI timer.
//!
//! The message bar never starts threads of its own. A host can spawn a
//! [`Ticker`] and feed each [`Tick::delta`] into [`crate::MessageBar::tick`]
//! from its event loop.

use std::any::Any;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, tick, Receiver, Sender, TrySendError};

/// One clock pulse.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Number of pulses delivered before this one.
    pub frame: u64,
    /// Time since the ticker started.
    pub elapsed: Duration,
    /// Time not yet reported by an earlier delivered tick.
    pub delta: Duration,
}

/// Clock thread sending [`Tick`]s on a small bounded channel.
///
/// Pulses the host is too slow to take are not queued. Their time is folded
/// into the `delta` of the next tick that gets through, so the sum of all
/// received deltas tracks wall-clock time.
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    stop_tx: Sender<()>,
    tick_rx: Receiver<Tick>,
}

impl Ticker {
    /// Start a ticker pulsing every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> Self {
        let (stop_tx, stop_rx) = bounded(1);
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("msgbar-ticker".to_string())
            .spawn(move || pulse(&tick_tx, &stop_rx, interval))
            .expect("Failed to spawn ticker thread");

        tracing::debug!(?interval, "ticker started");
        Self {
            handle: Some(handle),
            stop_tx,
            tick_rx,
        }
    }

    /// Channel the ticks arrive on. Disconnects once the thread has stopped.
    ///
    /// ```ignore
    /// select! {
    ///     recv(keys) -> key => handle_key(key?),
    ///     recv(ticker.receiver()) -> tick => { bar.tick(tick?.delta); }
    /// }
    /// ```
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Ask the thread to stop. Idempotent.
    pub fn shutdown(&self) {
        // Full means a stop request is already pending.
        let _ = self.stop_tx.try_send(());
    }

    /// Stop the thread and wait for it, logging it if it panicked.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                tracing::warn!(
                    panic = panic_message(payload.as_ref()),
                    "ticker thread panicked"
                );
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn pulse(tick_tx: &Sender<Tick>, stop_rx: &Receiver<()>, interval: Duration) {
    let start = Instant::now();
    let clock = tick(interval);
    let mut reported = start;
    let mut frame = 0u64;

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(clock) -> at => {
                let Ok(now) = at else { break };
                let event = Tick {
                    frame,
                    elapsed: now.saturating_duration_since(start),
                    delta: now.saturating_duration_since(reported),
                };
                match tick_tx.try_send(event) {
                    Ok(()) => {
                        reported = now;
                        frame += 1;
                    }
                    Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        }
    }
    tracing::debug!(frames = frame, "ticker stopped");
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "<non-string panic payload>"
    }
}
