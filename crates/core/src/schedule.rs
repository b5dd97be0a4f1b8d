//! Debounced tick cadences
//!
//! A [`Cadence`] fires at most once per interval and will not fire again until
//! the previous tick has been completed. Hosts that fall behind get a single
//! catch-up tick instead of a burst.

/// One repeating schedule with a re-entrancy guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval_ms: u32,
    last_fire_ms: u64,
    pending: bool,
}

impl Cadence {
    /// Schedule starting at `now_ms`; the first tick is one interval later.
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        debug_assert!(interval_ms > 0);
        Self {
            interval_ms,
            last_fire_ms: now_ms,
            pending: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Takes effect from the next tick.
    pub fn set_interval(&mut self, interval_ms: u32) {
        debug_assert!(interval_ms > 0);
        self.interval_ms = interval_ms;
    }

    /// A tick has fired and not yet completed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether a tick is due at `now_ms`. Marks the tick pending when it is.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.pending {
            return false;
        }
        if now_ms.saturating_sub(self.last_fire_ms) < u64::from(self.interval_ms) {
            return false;
        }
        self.pending = true;
        true
    }

    /// Finish the pending tick and re-arm from `now_ms`.
    pub fn complete(&mut self, now_ms: u64) {
        self.pending = false;
        self.last_fire_ms = now_ms;
    }
}
