//! Round robin with a fixed quantum.
//!
//! # Algorithm
//!
//! Processes are admitted to a FIFO ready queue in `(arrival, pid)` order.
//!
//! 1. Admit every process with `arrival <= t`.
//! 2. If the queue is empty, jump to the next arrival (idle).
//! 3. Dequeue the front process and run it for `min(q, remaining)` units.
//! 4. Admit processes that arrived strictly during the slice (`arrival < t`).
//! 5. Re-enqueue the process behind them if it still has work, otherwise
//!    latch its completion.
//!
//! Step 4 before step 5 is the fairness rule: newcomers go ahead of the
//! process that was just preempted. A process arriving exactly when a slice
//! ends is admitted at step 1 of the next round, behind the preempted one.
//!
//! # Complexity
//! O(n log n + B / q) dispatches, B = sum of burst times.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use super::{fresh_copy, SchedulingPolicy};
use crate::error::{Result, ScheduleError};
use crate::models::{sort_by_arrival, Gantt, Process, ScheduleOutcome, Time};

/// Preemptive round robin.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{RoundRobin, SchedulingPolicy};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let outcome = rr.schedule(&[Process::new(1, 0, 3, 0), Process::new(2, 0, 2, 0)]);
/// assert_eq!(outcome.gantt.len(), 3);
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates a round robin policy. Rejects a quantum `<= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut ps = fresh_copy(processes);
        sort_by_arrival(&mut ps);
        let n = ps.len();

        let mut gantt = Gantt::new();
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut cursor = 0;
        let mut t: Time = 0;

        loop {
            admit(&ps, &mut cursor, &mut ready, |at| at <= t);

            let Some(idx) = ready.pop_front() else {
                if cursor >= n {
                    break;
                }
                let next = ps[cursor].arrival_time;
                trace!(from = t, to = next, "cpu idle");
                t = t.max(next);
                continue;
            };

            let p = &mut ps[idx];
            p.dispatch(t);
            let start = t;
            let ran = p.run_for(self.quantum);
            t += ran;
            debug!(pid = p.pid, start, end = t, remaining = p.remaining_time, "dispatch");
            gantt.push(p.pid, start, t);

            admit(&ps, &mut cursor, &mut ready, |at| at < t);

            let p = &mut ps[idx];
            if p.is_finished() {
                p.complete(t);
            } else {
                ready.push_back(idx);
            }
        }

        info!(
            processes = n,
            quantum = self.quantum,
            makespan = t,
            "round robin run finished"
        );
        ScheduleOutcome::new(ps, gantt)
    }

    fn description(&self) -> &'static str {
        "Round Robin (preemptive, fixed quantum)"
    }
}

/// Moves processes from the arrival cursor into the ready queue while
/// `arrived` accepts their arrival time. `ps` must be sorted by arrival.
fn admit(
    ps: &[Process],
    cursor: &mut usize,
    ready: &mut VecDeque<usize>,
    arrived: impl Fn(Time) -> bool,
) {
    while *cursor < ps.len() && arrived(ps[*cursor].arrival_time) {
        ready.push_back(*cursor);
        *cursor += 1;
    }
}
