//! Deferred task queue on a virtual millisecond clock
//!
//! Stands in for UI timers. Tasks are plain values; the owner pops them
//! when due and decides what to do, including ignoring tasks whose
//! target no longer exists. Nothing is ever cancelled.

/// A task waiting for its due time
#[derive(Debug, Clone)]
struct Pending<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Ordered timer queue
///
/// Tasks due at the same instant run in scheduling order.
#[derive(Debug, Clone)]
pub struct TaskQueue<T> {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run `task` `delay_ms` after the current time
    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        let due_ms = self.now_ms + delay_ms;
        self.seq += 1;
        let seq = self.seq;
        // Keep sorted by (due, seq); later equal-due tasks go after.
        let index = self.pending.partition_point(|p| (p.due_ms, p.seq) <= (due_ms, seq));
        self.pending.insert(index, Pending { due_ms, seq, task });
    }

    /// Due time of the next task
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.first().map(|p| p.due_ms)
    }

    /// Pop the next task due at or before `until_ms`
    ///
    /// The clock moves to the task's due time, so tasks scheduled by its
    /// handler are relative to that instant.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        if self.next_due_ms()? > until_ms {
            return None;
        }
        let next = self.pending.remove(0);
        self.now_ms = self.now_ms.max(next.due_ms);
        Some(next.task)
    }

    /// Move the clock forward to `ms` (never backwards)
    pub fn set_now(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    /// Pending tasks in due order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pending.iter().map(|p| &p.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_pop_in_due_order() {
        let mut queue = TaskQueue::new();
        queue.schedule(300, "fade");
        queue.schedule(150, "append");
        queue.schedule(150, "append-2");

        assert_eq!(queue.pop_due(100), None);
        assert_eq!(queue.pop_due(500), Some("append"));
        assert_eq!(queue.now_ms(), 150);
        assert_eq!(queue.pop_due(500), Some("append-2"));
        assert_eq!(queue.pop_due(500), Some("fade"));
        assert_eq!(queue.now_ms(), 300);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_schedule_relative_to_clock() {
        let mut queue = TaskQueue::new();
        queue.schedule(150, 1);
        assert_eq!(queue.pop_due(1000), Some(1));
        queue.schedule(50, 2);
        assert_eq!(queue.next_due_ms(), Some(200));
    }

    #[test]
    fn test_clock_never_moves_back() {
        let mut queue: TaskQueue<()> = TaskQueue::new();
        queue.set_now(500);
        queue.set_now(100);
        assert_eq!(queue.now_ms(), 500);
    }
}
