//! Timed tick producer.
//!
//! The clock runs on its own thread and hands one payload-less
//! [`ClockSignal::Tick`] per replayed event to the consumer over a rendezvous
//! channel. The consumer owns the position counter; the clock only paces.

use std::num::NonZeroU32;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackRate(NonZeroU32);

/// Error returned for a zero playback rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("playback rate must be at least 1 tick per second")]
pub struct InvalidPlaybackRate;

impl PlaybackRate {
    /// Rate used when none is configured.
    pub const DEFAULT: Self = match NonZeroU32::new(20) {
        Some(rate) => Self(rate),
        None => unreachable!(),
    };

    /// Smart constructor: rejects zero.
    pub fn new(ticks_per_second: u32) -> Result<Self, InvalidPlaybackRate> {
        NonZeroU32::new(ticks_per_second)
            .map(Self)
            .ok_or(InvalidPlaybackRate)
    }

    /// Ticks per second.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Sleep between ticks: whole milliseconds, at least one.
    pub fn interval(self) -> Duration {
        Duration::from_millis(u64::from((1000 / self.0.get()).max(1)))
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Signal sent from the clock to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSignal {
    /// One simulated event occurred.
    Tick,
    /// Every tick has been sent; the clock has stopped.
    Complete,
}

/// Finite tick producer.
#[derive(Debug, Clone, Copy)]
pub struct ReplayClock {
    total_ticks: usize,
    rate: PlaybackRate,
}

impl ReplayClock {
    /// Clock that will emit `total_ticks` ticks at `rate`.
    pub fn new(total_ticks: usize, rate: PlaybackRate) -> Self {
        Self { total_ticks, rate }
    }

    /// Number of ticks this clock emits.
    pub fn total_ticks(&self) -> usize {
        self.total_ticks
    }

    /// Start the clock on a background thread.
    ///
    /// The channel has zero capacity: each `send` waits until the consumer
    /// takes the tick, so at most one tick is ever in flight.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the OS refuses to spawn the thread.
    pub fn spawn(self) -> std::io::Result<ClockHandle> {
        let (tx, rx) = mpsc::sync_channel(0);
        let thread = thread::Builder::new()
            .name("replay-clock".to_string())
            .spawn(move || self.run_with(&tx, thread::sleep))?;
        Ok(ClockHandle {
            rx,
            _thread: thread,
        })
    }

    /// Producer loop: sleep, then tick, `total_ticks` times; then complete.
    ///
    /// Returns the number of ticks delivered. Stops early, without sending
    /// `Complete`, once the receiver is gone.
    pub fn run_with(
        self,
        tx: &SyncSender<ClockSignal>,
        mut sleep: impl FnMut(Duration),
    ) -> usize {
        let interval = self.rate.interval();
        for delivered in 0..self.total_ticks {
            sleep(interval);
            if tx.send(ClockSignal::Tick).is_err() {
                debug!(delivered, "Clock receiver dropped; stopping");
                return delivered;
            }
        }
        // A receiver dropped after the last tick is fine.
        let _ = tx.send(ClockSignal::Complete);
        debug!(ticks = self.total_ticks, "Clock finished");
        self.total_ticks
    }
}

/// Consumer side of a running clock.
///
/// Dropping the handle cancels the clock: its next send fails and the
/// thread exits. The thread is not joined; it is at most one interval away
/// from noticing.
#[derive(Debug)]
pub struct ClockHandle {
    rx: Receiver<ClockSignal>,
    _thread: JoinHandle<usize>,
}

impl ClockHandle {
    /// Take a signal if the clock is waiting to hand one over.
    ///
    /// Returns `None` when nothing is ready. A clock that has gone away is
    /// reported as `Complete`.
    pub fn try_recv(&self) -> Option<ClockSignal> {
        match self.rx.try_recv() {
            Ok(signal) => Some(signal),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(ClockSignal::Complete),
        }
    }

    /// Wait up to `timeout` for the next signal.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClockSignal> {
        match self.rx.recv_timeout(timeout) {
            Ok(signal) => Some(signal),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(ClockSignal::Complete),
        }
    }
}
