//! Delayed continuations.
//!
//! Every transition that a front end animates is split in two: the request
//! mutates what must change immediately and schedules the rest. Nothing runs
//! on its own; the host moves the clock with [`Game::advance`] and due steps
//! run in order.
//!
//! [`Game::advance`]: crate::Game::advance

extern crate alloc;

use alloc::collections::VecDeque;

/// A step waiting for its due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<S> {
    /// Clock value, in milliseconds, at which the step becomes due.
    pub due_at: u64,
    /// The step itself.
    pub step: S,
}

/// A queue of steps ordered by due time. Steps due at the same time run in
/// the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<S> {
    now: u64,
    queue: VecDeque<Scheduled<S>>,
}

impl<S> Scheduler<S> {
    /// Creates an idle scheduler with the clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: 0,
            queue: VecDeque::new(),
        }
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Schedules `step` to run `delay` milliseconds from now.
    pub fn schedule(&mut self, delay: u64, step: S) {
        let due_at = self.now.saturating_add(delay);
        let position = self
            .queue
            .iter()
            .position(|entry| entry.due_at > due_at)
            .unwrap_or(self.queue.len());
        self.queue.insert(position, Scheduled { due_at, step });
    }

    /// Pops the earliest step if it is due at or before `deadline`, moving
    /// the clock to its due time.
    pub fn pop_due(&mut self, deadline: u64) -> Option<S> {
        if self.queue.front()?.due_at > deadline {
            return None;
        }
        let entry = self.queue.pop_front()?;
        self.now = self.now.max(entry.due_at);
        Some(entry.step)
    }

    /// Pops the earliest step whatever its due time, moving the clock to it.
    pub fn pop_next(&mut self) -> Option<S> {
        self.pop_due(u64::MAX)
    }

    /// Moves the clock forward to `now`. The clock never goes backwards.
    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }

    /// Milliseconds until the earliest step is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.queue
            .front()
            .map(|entry| entry.due_at.saturating_sub(self.now))
    }

    /// Number of pending steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every pending step.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }
}

impl<S> Default for Scheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}
