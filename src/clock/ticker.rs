//! Ticker: a heartbeat thread for hosts without their own event loop.
//!
//! Each [`Tick`] carries the instant it was taken, which the host passes
//! straight to `poll(now)` on its displays. Ticks are never queued up: a
//! slow receiver misses beats instead of getting a burst.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// One heartbeat.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Beat number (monotonically increasing, gaps mean dropped beats).
    pub frame: u64,
    /// When the beat was taken.
    pub at: Instant,
    /// Time since the ticker started.
    pub elapsed: Duration,
}

/// Owns the heartbeat thread; stops it on drop.
#[derive(Debug)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    tick_rx: Receiver<Tick>,
}

impl Ticker {
    /// Start beating every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("flapboard-ticker".to_string())
            .spawn(move || Self::run_loop(&tick_tx, &flag, interval))?;
        tracing::debug!(interval_ms = interval.as_millis(), "ticker started");

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Tick receiver, for `select!` loops.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Ask the thread to stop.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Stop the thread and wait for it.
    pub fn join(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now < next_tick {
                thread::sleep((next_tick - now).min(Duration::from_millis(1)));
                continue;
            }

            let tick = Tick {
                frame,
                at: now,
                elapsed: now - start,
            };
            if let Err(TrySendError::Disconnected(_)) = tick_tx.try_send(tick) {
                break;
            }

            frame += 1;
            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::TryRecvError;

    #[test]
    fn test_ticker_beats() {
        let ticker = Ticker::spawn(Duration::from_millis(5)).unwrap();

        let first = ticker.receiver().recv_timeout(Duration::from_millis(200)).unwrap();
        assert_eq!(first.frame, 0);
        let second = ticker.receiver().recv_timeout(Duration::from_millis(200)).unwrap();
        assert!(second.frame > first.frame);
        assert!(second.at >= first.at);

        ticker.join();
    }

    #[test]
    fn test_ticker_shutdown() {
        let ticker = Ticker::spawn(Duration::from_millis(100)).unwrap();
        ticker.shutdown();
        thread::sleep(Duration::from_millis(20));
        ticker.join();
    }

    #[test]
    fn test_drop_joins_thread() {
        let ticker = Ticker::spawn(Duration::from_millis(2)).unwrap();
        let rx = ticker.receiver().clone();
        rx.recv_timeout(Duration::from_millis(200)).unwrap();
        drop(ticker);

        // The thread is gone once drop returns, so only buffered beats remain.
        assert!(rx.try_iter().count() <= 2);
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Disconnected);
    }
}
