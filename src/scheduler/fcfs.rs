//! First-come-first-served.
//!
//! # Algorithm
//!
//! 1. Sort by `(arrival, pid)`; that order is the dispatch order.
//! 2. For each process, idle the clock up to its arrival if needed.
//! 3. Run it for its whole burst as a single segment.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use tracing::{debug, info, trace};

use super::{fresh_copy, SchedulingPolicy};
use crate::models::{sort_by_arrival, Gantt, Process, ScheduleOutcome, Time};

/// Non-preemptive first-come-first-served.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{Fcfs, SchedulingPolicy};
///
/// let processes = vec![Process::new(1, 0, 5, 0), Process::new(2, 2, 3, 0)];
/// let outcome = Fcfs.schedule(&processes);
/// assert_eq!(outcome.gantt.len(), 2);
/// assert_eq!(outcome.makespan(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut ps = fresh_copy(processes);
        sort_by_arrival(&mut ps);

        let mut gantt = Gantt::new();
        let mut t: Time = 0;

        for p in &mut ps {
            if t < p.arrival_time {
                trace!(from = t, to = p.arrival_time, "cpu idle");
                t = p.arrival_time;
            }

            p.dispatch(t);
            let ran = p.run_for(p.burst_time);
            debug!(pid = p.pid, start = t, end = t + ran, "dispatch");
            gantt.push(p.pid, t, t + ran);

            t += ran;
            p.complete(t);
        }

        info!(processes = ps.len(), makespan = t, "fcfs run finished");
        ScheduleOutcome::new(ps, gantt)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served (non-preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{procs, timeline};
    use crate::scheduler::ScheduleKpi;
    use crate::validation::check_outcome;

    #[test]
    fn test_fcfs_worked_example() {
        let input = procs(&[(1, 0, 5, 2), (2, 2, 3, 1), (3, 4, 1, 4), (4, 6, 2, 3)]);
        let outcome = Fcfs.schedule(&input);

        assert_eq!(
            timeline(&outcome),
            vec![(1, 0, 5), (2, 5, 8), (3, 8, 9), (4, 9, 11)]
        );
        let kpi = ScheduleKpi::calculate(&outcome);
        assert!((kpi.avg_turnaround_time - 5.25).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 2.5).abs() < 1e-10);
        assert!((kpi.avg_response_time - 2.5).abs() < 1e-10);
        assert!(check_outcome(&outcome, &input).is_ok());
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let input = procs(&[(1, 3, 2, 0), (2, 10, 1, 0)]);
        let outcome = Fcfs.schedule(&input);
        assert_eq!(timeline(&outcome), vec![(1, 3, 5), (2, 10, 11)]);
        assert_eq!(outcome.process(2).unwrap().response_time(), Some(0));
    }

    #[test]
    fn test_fcfs_pid_tie_break() {
        let input = procs(&[(5, 0, 1, 0), (2, 0, 1, 0), (9, 0, 1, 0)]);
        let outcome = Fcfs.schedule(&input);
        let order: Vec<_> = timeline(&outcome).iter().map(|s| s.0).collect();
        assert_eq!(order, vec![2, 5, 9]);
    }

    #[test]
    fn test_fcfs_ignores_priority() {
        let input = procs(&[(1, 0, 4, 9), (2, 1, 1, 0)]);
        let outcome = Fcfs.schedule(&input);
        assert_eq!(timeline(&outcome), vec![(1, 0, 4), (2, 4, 5)]);
    }

    #[test]
    fn test_fcfs_does_not_mutate_input() {
        let input = procs(&[(1, 0, 2, 0)]);
        let before = input.clone();
        let _ = Fcfs.schedule(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_fcfs_empty() {
        let outcome = Fcfs.schedule(&[]);
        assert!(outcome.gantt.is_empty());
        assert_eq!(outcome.makespan(), 0);
    }
}
