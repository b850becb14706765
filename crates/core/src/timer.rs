//! Drop timer - the gravity clock
//!
//! A deterministic accumulator: the host reports elapsed milliseconds and the timer says when
//! an interval has fully elapsed. Starting replaces any running schedule and resets the phase;
//! stopping an idle timer does nothing.

/// Gravity clock owned by a single `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl DropTimer {
    /// A stopped timer that will use `interval_ms` once started.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: false,
        }
    }

    /// Start (or restart) with a new interval. The phase is reset.
    pub fn start(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.running = true;
    }

    /// Start with the current interval.
    pub fn resume(&mut self) {
        self.start(self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Change the interval. A running timer restarts so the new speed applies to the very
    /// next tick; a stopped one only remembers it.
    pub fn restart(&mut self, interval_ms: u32) {
        if self.running {
            self.start(interval_ms);
        } else {
            self.interval_ms = interval_ms.max(1);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds until the next expiry, or None while stopped.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    /// Advance by `ms`. Returns true when the interval was reached; the phase then wraps to 0.
    ///
    /// Time past the expiry is discarded, so callers that need several expiries feed at most
    /// `remaining_ms()` per call.
    pub fn elapse(&mut self, ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }
}
