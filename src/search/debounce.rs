//! Deadline-based debounce primitive.
//!
//! Zellij timers cannot be cancelled, so a [`Debouncer`] never relies on a timer
//! being the "right" one. Every [`Debouncer::push`] restarts the quiet period and
//! returns the delay the caller should schedule a timer for. When any timer fires the
//! caller calls [`Debouncer::poll`]: timers that belonged to an older push find the
//! deadline still in the future and report [`Poll::Waiting`], so only the last value
//! pushed is ever emitted.

use std::time::{Duration, Instant};

/// Outcome of polling a [`Debouncer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    /// The pending value has been stable for the whole delay.
    Ready(T),
    /// A value is pending; the quiet period ends after the given duration.
    Waiting(Duration),
    /// Nothing is pending.
    Idle,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Delays a value until it has stopped changing for a fixed delay.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period.
    ///
    /// Returns the delay after which the caller should poll again.
    pub fn push(&mut self, value: T, now: Instant) -> Duration {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        self.delay
    }

    /// Emits the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Poll<T> {
        match self.pending.take() {
            None => Poll::Idle,
            Some(pending) if now >= pending.deadline => Poll::Ready(pending.value),
            Some(pending) => {
                let remaining = pending.deadline - now;
                self.pending = Some(pending);
                Poll::Waiting(remaining)
            }
        }
    }

    /// Drops the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
