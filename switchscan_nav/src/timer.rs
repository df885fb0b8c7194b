// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scheduler seam and a manually driven scheduler.
//!
//! The navigator keeps at most one timer armed. Arming a new one always cancels the previous
//! token first, and a fired token that is no longer the navigator's pending token is ignored, so a
//! cancelled timer never acts even if its fire was already queued.

use alloc::vec::Vec;
use core::time::Duration;

/// Identifies one armed timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub(crate) u64);

/// Runs deferred callbacks on behalf of the navigator.
///
/// When `delay` has elapsed after [`Scheduler::arm`], the host calls
/// [`Navigator::on_timer`](crate::Navigator::on_timer) with the token, on the same logical thread
/// that drives the rest of the navigator.
pub trait Scheduler {
    /// Arrange for `token` to fire after `delay`.
    fn arm(&mut self, delay: Duration, token: TimerToken);

    /// Forget `token`. Cancelling an unknown or already fired token does nothing.
    fn cancel(&mut self, token: TimerToken);
}

/// A scheduler driven by an explicit virtual clock.
///
/// Nothing fires on its own: the host advances time and feeds the returned tokens back to the
/// navigator. This suits deterministic tests as well as hosts that already own a frame or tick
/// loop.
///
/// ```rust
/// use core::time::Duration;
/// use switchscan_nav::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// assert_eq!(scheduler.armed_count(), 0);
/// assert_eq!(scheduler.now(), Duration::ZERO);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    armed: Vec<(Duration, TimerToken)>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero with nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Whether `token` is armed.
    pub fn is_armed(&self, token: TimerToken) -> bool {
        self.armed.iter().any(|&(_, t)| t == token)
    }

    /// Earliest deadline among armed timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.armed.iter().map(|&(deadline, _)| deadline).min()
    }

    /// Move the clock forward and return the tokens that became due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now = self.now.saturating_add(by);
        let now = self.now;
        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        self.armed.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, token)| token).collect()
    }

    /// Jump the clock to the earliest deadline and return that timer's token.
    pub fn fire_next(&mut self) -> Option<TimerToken> {
        let (pos, &(deadline, token)) = self
            .armed
            .iter()
            .enumerate()
            .min_by_key(|(_, (deadline, _))| *deadline)?;
        self.armed.remove(pos);
        self.now = self.now.max(deadline);
        Some(token)
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, delay: Duration, token: TimerToken) {
        self.armed.push((self.now.saturating_add(delay), token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.armed.retain(|&(_, t)| t != token);
    }
}
