//! Non-preemptive priority scheduling.
//!
//! # Algorithm
//!
//! 1. At each decision point, collect arrived processes that have not run.
//! 2. Pick the lowest priority value; ties by earlier arrival, then lower pid.
//! 3. Run it to completion as one segment.
//! 4. If nothing is ready, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n^2): every dispatch rescans the remaining processes.

use tracing::{debug, info, trace};

use super::{fresh_copy, SchedulingPolicy};
use crate::models::{Gantt, Process, ScheduleOutcome, Time};

/// Non-preemptive priority (lower value = more urgent).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl SchedulingPolicy for PriorityScheduler {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut ps = fresh_copy(processes);
        let n = ps.len();

        let mut gantt = Gantt::new();
        let mut t: Time = 0;
        let mut completed = 0;

        while completed < n {
            let pick = ps
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_finished() && p.has_arrived(t))
                .min_by_key(|(_, p)| (p.priority, p.arrival_time, p.pid))
                .map(|(i, _)| i);

            let Some(idx) = pick else {
                let Some(next) = ps
                    .iter()
                    .filter(|p| !p.is_finished())
                    .map(|p| p.arrival_time)
                    .min()
                else {
                    break;
                };
                trace!(from = t, to = next, "cpu idle");
                t = next;
                continue;
            };

            let p = &mut ps[idx];
            p.dispatch(t);
            let ran = p.run_for(p.burst_time);
            debug!(pid = p.pid, priority = p.priority, start = t, end = t + ran, "dispatch");
            gantt.push(p.pid, t, t + ran);

            t += ran;
            p.complete(t);
            completed += 1;
        }

        info!(processes = n, makespan = t, "priority run finished");
        ScheduleOutcome::new(ps, gantt)
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive, lower value first)"
    }
}
