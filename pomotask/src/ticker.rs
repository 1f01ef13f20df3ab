//! Once-per-second tick schedule for the countdown clock.
//!
//! The clock itself never reads time. `Ticker` owns at most one background
//! task that emits a [`Tick`] every period on an mpsc channel while the clock
//! is running. The event loop drains the channel and dispatches
//! `Intent::Tick` for every tick whose generation is still current.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period, stamped with the schedule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Generation of the schedule that emitted this tick.
    pub generation: u64,
}

/// Owner of the single repeating tick task.
///
/// Dropping the ticker cancels the schedule, so no tick can outlive the
/// screen that created it.
pub struct Ticker {
    period: Duration,
    tx: mpsc::Sender<Tick>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    /// Creates a stopped ticker and the receiver its ticks arrive on.
    #[must_use]
    pub fn new(period: Duration, capacity: usize) -> (Self, mpsc::Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let ticker = Self {
            period,
            tx,
            handle: None,
            generation: 0,
        };
        (ticker, rx)
    }

    /// Whether a schedule is currently active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Generation of the current (or most recent) schedule.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `tick` came from the active schedule.
    ///
    /// Ticks buffered before a stop/start cycle are stale.
    #[must_use]
    pub const fn is_current(&self, tick: Tick) -> bool {
        self.is_active() && tick.generation == self.generation
    }

    /// Starts or stops the schedule to match the clock's running flag.
    pub fn sync(&mut self, running: bool) {
        if running {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Starts the schedule. No-op if one is already active.
    ///
    /// The first tick fires one full period after the call.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();

        tracing::debug!(generation, "tick schedule started");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Tick { generation }).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancels the schedule. No-op if none is active.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "tick schedule stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
