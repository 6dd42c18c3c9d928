//! Process record model.
//!
//! A process is the unit of work handed to a scheduling policy. The input
//! half (pid, arrival, burst, priority) never changes; the simulation half
//! (remaining time, first dispatch, completion) is owned by exactly one
//! policy run and is read-only once the run returns.
//!
//! # Derived metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

/// Simulation clock value (abstract time units).
pub type Time = i64;

/// Caller-supplied process identifier.
pub type Pid = i64;

/// A process to be scheduled.
///
/// # Priority
/// Lower value = more urgent. Only the priority policy looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier (not validated for uniqueness).
    pub pid: Pid,
    /// Time at which the process becomes runnable.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// CPU time still owed to the process.
    pub remaining_time: Time,
    /// Time of first dispatch. `None` until the process first runs.
    pub start_time: Option<Time>,
    /// Time at which the last unit of work finished.
    pub completion_time: Option<Time>,
}

impl Process {
    /// Creates a fresh, never-run process.
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time, priority: i32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Clears all simulation state, as if the process was just read.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = None;
    }

    /// Whether the process has arrived by time `now`.
    #[inline]
    pub fn has_arrived(&self, now: Time) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process has received its full burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Records a dispatch at `now`. Only the first dispatch is latched.
    pub fn dispatch(&mut self, now: Time) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Charges `units` of CPU time to the process.
    ///
    /// Never takes `remaining_time` below zero.
    pub fn run_for(&mut self, units: Time) -> Time {
        let ran = units.min(self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    /// Latches the completion time. Called once, at the last unit of work.
    pub fn complete(&mut self, now: Time) {
        debug_assert!(self.is_finished(), "pid {} completed with work left", self.pid);
        debug_assert!(
            self.completion_time.is_none(),
            "pid {} completed twice",
            self.pid
        );
        self.completion_time = Some(now);
    }

    /// Turnaround time: completion - arrival.
    pub fn turnaround_time(&self) -> Option<Time> {
        self.completion_time.map(|ct| ct - self.arrival_time)
    }

    /// Waiting time: turnaround - burst.
    pub fn waiting_time(&self) -> Option<Time> {
        self.turnaround_time().map(|tat| tat - self.burst_time)
    }

    /// Response time: first dispatch - arrival.
    pub fn response_time(&self) -> Option<Time> {
        self.start_time.map(|st| st - self.arrival_time)
    }
}

/// Sorts processes by `(arrival_time, pid)`. Stable.
pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by(|a, b| {
        a.arrival_time
            .cmp(&b.arrival_time)
            .then_with(|| a.pid.cmp(&b.pid))
    });
}
