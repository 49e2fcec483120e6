//! Repeating-tick scheduling for live countdown views.
//!
//! A `Ticker` is owned by the view that renders a timer and is dropped with
//! it, so a torn-down view can never leak a recurring tick. When a timer's
//! theme or target date changes the owning view replaces its ticker with a
//! fresh one instead of mutating it in place.

use std::time::{Duration, Instant};

/// Cooperative repeating tick.
///
/// The owner interleaves input polling and rendering on a single thread:
/// poll for input for at most [`timeout`](Self::timeout), then call
/// [`tick`](Self::tick) and re-render when it reports a due tick.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// Create a ticker whose first tick is due one period from now.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// The configured tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick is due; zero when overdue.
    ///
    /// Suitable as the timeout for an input poll so the loop wakes exactly
    /// when a render is needed.
    pub fn timeout(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Report whether a tick is due, scheduling the next one if so.
    ///
    /// Rescheduling is relative to now rather than the missed deadline, so a
    /// stalled loop (e.g. the terminal was suspended) resumes with single
    /// ticks instead of a burst.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next {
            self.next = now + self.period;
            true
        } else {
            false
        }
    }
}
