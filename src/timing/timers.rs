//! Deferred engine tasks.
//!
//! Tasks fire in due-time order; tasks due at the same instant fire in the
//! order they were scheduled. Each task is popped, and so fires, at most once.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::entity::{Generation, InstanceId};

/// Work the engine defers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerTask {
    /// Hide a mismatched pair and unlock input.
    FlipBack {
        first: InstanceId,
        second: InstanceId,
    },
    /// End the completion celebration.
    Celebration,
}

/// A task waiting in the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Clock time at which the task becomes due.
    pub due: Duration,
    /// Game that scheduled the task.
    pub generation: Generation,
    /// What to do.
    pub task: TimerTask,
    seq: u64,
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of scheduled tasks.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<ScheduledTask>>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, generation: Generation, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(ScheduledTask {
            due,
            generation,
            task,
            seq,
        }));
    }

    /// Remove and return the earliest task if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledTask> {
        match self.heap.peek() {
            Some(Reverse(next)) if next.due <= now => self.heap.pop().map(|Reverse(task)| task),
            _ => None,
        }
    }

    /// When the earliest task becomes due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(task)| task.due)
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.heap.len();
        self.heap.clear();
        dropped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
