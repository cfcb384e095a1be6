//! One-shot delayed tasks
//!
//! The scene advances the scheduler clock by the fixed timestep each tick, so
//! deadlines are monotonic and deterministic.

use std::time::Duration;

/// Work that can be deferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Tear down and rebuild the round after a death
    ResetRound,
}

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Timer service used by the gameplay core
pub trait Scheduler {
    /// Current clock reading
    fn now(&self) -> Duration;
    /// Run `task` once, `delay` from now
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle;
    /// Drop a pending task. Returns false if it already fired or never existed.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
    /// Move the clock forward
    fn advance(&mut self, dt: Duration);
    /// Remove and return every task whose deadline has passed, earliest first
    fn drain_due(&mut self) -> Vec<TimerTask>;
    /// Number of tasks still waiting
    fn pending(&self) -> usize;
}

#[derive(Debug, Clone)]
struct Scheduled {
    handle: TimerHandle,
    deadline: Duration,
    task: TimerTask,
}

/// Scheduler driven by the simulation clock
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    now: Duration,
    next_handle: u64,
    queue: Vec<Scheduled>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TickScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.push(Scheduled {
            handle,
            deadline: self.now + delay,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.queue.len();
        self.queue.retain(|s| s.handle != handle);
        self.queue.len() != before
    }

    fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    fn drain_due(&mut self) -> Vec<TimerTask> {
        let now = self.now;
        let mut due: Vec<Scheduled> = Vec::new();
        self.queue.retain(|s| {
            if s.deadline <= now {
                due.push(s.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| (s.deadline, s.handle.0));
        due.into_iter().map(|s| s.task).collect()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
