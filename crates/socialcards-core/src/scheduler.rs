//! Deadline scheduler for timed animation phases.
//!
//! Each timed phase of a card (fade out, fade in, effect end, ripple
//! expiry...) is a [`ScheduledTask`] in a min-heap keyed by deadline. The
//! returned [`TaskId`] doubles as a cancel token. Time is always passed in,
//! so the same scheduler runs against the wall clock in the app and a
//! virtual clock in tests.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

/// Unique task ID, also used to cancel the task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A scheduled task
#[derive(Debug)]
pub struct ScheduledTask<T> {
    /// When the task should run
    pub run_at: Instant,
    /// Unique task ID
    pub id: TaskId,
    /// What to do when the deadline passes
    pub payload: T,
}

impl<T> PartialEq for ScheduledTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ScheduledTask<T> {}

impl<T> PartialOrd for ScheduledTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Min-heap of pending tasks with lazy cancellation
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: BinaryHeap<ScheduledTask<T>>,
    cancelled: HashSet<TaskId>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: BinaryHeap::new(),
            cancelled: HashSet::new(),
            next_id: 0,
        }
    }

    /// Add a one-shot task due `delay` after `now`
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        self.tasks.push(ScheduledTask {
            run_at: now + delay,
            id,
            payload,
        });

        id
    }

    /// Cancel a pending task. Returns false if it already ran, was already
    /// cancelled, or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let pending = self
            .tasks
            .iter()
            .any(|task| task.id == id && !self.cancelled.contains(&task.id));
        if pending {
            self.cancelled.insert(id);
        }
        pending
    }

    /// Get the next task if it's due
    pub fn pop_due(&mut self, now: Instant) -> Option<ScheduledTask<T>> {
        loop {
            let due = self.tasks.peek().is_some_and(|task| task.run_at <= now);
            if !due {
                return None;
            }
            let task = self.tasks.pop()?;
            if self.cancelled.remove(&task.id) {
                continue;
            }
            return Some(task);
        }
    }

    /// Deadline of the earliest live task
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks
            .iter()
            .filter(|task| !self.cancelled.contains(&task.id))
            .map(|task| task.run_at)
            .min()
    }

    /// Get duration until next task (for sleep)
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of live (non-cancelled) tasks
    pub fn len(&self) -> usize {
        self.tasks.len() - self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn tasks_pop_in_deadline_order() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule_after(start, ms(300), "late");
        sched.schedule_after(start, ms(100), "early");

        assert!(sched.pop_due(start).is_none());
        assert_eq!(sched.pop_due(start + ms(300)).map(|t| t.payload), Some("early"));
        assert_eq!(sched.pop_due(start + ms(300)).map(|t| t.payload), Some("late"));
        assert!(sched.is_empty());
    }

    #[test]
    fn equal_deadlines_are_fifo() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule_after(start, ms(50), 1);
        sched.schedule_after(start, ms(50), 2);
        sched.schedule_after(start, ms(50), 3);

        let order: Vec<i32> = std::iter::from_fn(|| sched.pop_due(start + ms(50)))
            .map(|t| t.payload)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        let id = sched.schedule_after(start, ms(100), "cancel me");
        sched.schedule_after(start, ms(200), "keep");

        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        assert_eq!(sched.len(), 1);
        assert_eq!(sched.next_deadline(), Some(start + ms(200)));

        assert_eq!(sched.pop_due(start + ms(500)).map(|t| t.payload), Some("keep"));
        assert!(sched.pop_due(start + ms(500)).is_none());
    }

    #[test]
    fn cancel_after_run_is_false() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        let id = sched.schedule_after(start, ms(10), ());
        assert!(sched.pop_due(start + ms(10)).is_some());
        assert!(!sched.cancel(id));
    }

    #[test]
    fn time_until_next_saturates() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        assert_eq!(sched.time_until_next(start), None);
        sched.schedule_after(start, ms(100), ());
        assert_eq!(sched.time_until_next(start + ms(40)), Some(ms(60)));
        assert_eq!(sched.time_until_next(start + ms(400)), Some(Duration::ZERO));
    }
}
