//! Fixed-window attempt counting used to throttle admin authentication.
//!
//! This is the pure counting logic; the keyed, shared limiter lives in the
//! API crate.

use std::time::{Duration, Instant};

/// Default number of admin attempts allowed per window.
pub const DEFAULT_ADMIN_MAX_ATTEMPTS: u32 = 10;

/// Default admin rate-limit window in seconds.
pub const DEFAULT_ADMIN_WINDOW_SECS: u64 = 60;

/// Limit parameters: at most `max_attempts` within each `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_attempts: u32,
    pub window: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ADMIN_MAX_ATTEMPTS,
            window: Duration::from_secs(DEFAULT_ADMIN_WINDOW_SECS),
        }
    }
}

/// Outcome of recording one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

/// Attempt counter for a single caller.
#[derive(Debug, Clone, Copy)]
pub struct FixedWindow {
    started_at: Instant,
    attempts: u32,
}

impl FixedWindow {
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            attempts: 0,
        }
    }

    pub fn is_expired(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.started_at) >= window
    }

    /// Count one attempt at `now`, starting a fresh window if the current one
    /// has elapsed. Attempts past the limit are still counted.
    pub fn record(&mut self, now: Instant, limit: RateLimit) -> WindowDecision {
        if self.is_expired(now, limit.window) {
            *self = Self::new(now);
        }
        self.attempts = self.attempts.saturating_add(1);

        if self.attempts > limit.max_attempts {
            let elapsed = now.saturating_duration_since(self.started_at);
            WindowDecision::Limited {
                retry_after: limit.window.saturating_sub(elapsed),
            }
        } else {
            WindowDecision::Allowed {
                remaining: limit.max_attempts - self.attempts,
            }
        }
    }
}
