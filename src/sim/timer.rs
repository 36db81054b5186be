//! Deadline-ordered timer queue
//!
//! Animations that used to chain completion callbacks are scheduled here as
//! `(deadline, action)` pairs and fired from the frame loop once the clock
//! reaches them. Equal deadlines fire in the order they were scheduled.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Entry<T> {
    deadline: f64,
    action: T,
}

/// FIFO queue of scheduled actions, sorted by deadline
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: VecDeque<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Schedule `action` to fire once the clock reaches `deadline`
    pub fn schedule(&mut self, deadline: f64, action: T) {
        // After every entry with deadline <= ours keeps ties FIFO
        let idx = self
            .entries
            .iter()
            .position(|e| e.deadline > deadline)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, Entry { deadline, action });
    }

    /// Remove the earliest action if it is due, returning it with its deadline
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, T)> {
        if self.entries.front()?.deadline <= now {
            self.entries.pop_front().map(|e| (e.deadline, e.action))
        } else {
            None
        }
    }
}
