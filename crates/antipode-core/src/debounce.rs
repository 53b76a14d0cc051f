//! Trailing-edge debounce as a small state machine.
//!
//! Each `push` replaces the pending value and bumps a generation counter, so
//! any timer armed for an earlier push becomes stale: its ticket no longer
//! matches and `fire` returns `None`. Timers are never cancelled, only
//! outrun. The host arms one timer per ticket, expiring at `Ticket::due`.

use instant::Instant;
use std::time::Duration;

/// Handle for one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    pub due: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new value and restart the quiet interval.
    pub fn push(&mut self, value: T, now: Instant) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        let due = now + self.quiet;
        self.pending = Some(value);
        Ticket {
            generation: self.generation,
            due,
        }
    }

    /// Timer callback for `ticket`. Yields the pending value only if no newer
    /// push happened since the ticket was issued.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value and invalidate every outstanding ticket.
    pub fn supersede(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}
