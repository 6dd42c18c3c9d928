//! Shortest remaining time first (preemptive SJF).
//!
//! # Algorithm
//!
//! The clock advances one unit at a time. At every unit the arrived,
//! unfinished process with the least remaining time gets the CPU, so a
//! newcomer with a shorter job preempts the running process at its arrival.
//!
//! Ties on remaining time go to the earlier arrival, then the lower pid.
//! When nothing has arrived the clock jumps to the next arrival; no segment
//! is emitted for the gap.
//!
//! Long jobs can starve while shorter ones keep arriving.
//!
//! # Complexity
//! O(n * B) where B is the sum of burst times.

use tracing::{debug, info, trace};

use super::{fresh_copy, SchedulingPolicy};
use crate::models::{Gantt, Process, ScheduleOutcome, Time};

/// Preemptive shortest-remaining-time-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome {
        let mut ps = fresh_copy(processes);
        let n = ps.len();

        let mut gantt = Gantt::new();
        let mut t: Time = 0;
        let mut completed = 0;
        let mut running: Option<usize> = None;

        while completed < n {
            let Some(idx) = select_shortest(&ps, t) else {
                let Some(next) = next_arrival(&ps) else {
                    break;
                };
                trace!(from = t, to = next, "cpu idle");
                t = next;
                running = None;
                continue;
            };

            if running != Some(idx) {
                debug!(
                    pid = ps[idx].pid,
                    remaining = ps[idx].remaining_time,
                    at = t,
                    "dispatch"
                );
                running = Some(idx);
            }

            let p = &mut ps[idx];
            p.dispatch(t);
            let ran = p.run_for(1);
            gantt.push(p.pid, t, t + ran);
            t += ran;

            if p.is_finished() {
                p.complete(t);
                completed += 1;
                running = None;
            }
        }

        info!(processes = n, makespan = t, "srtf run finished");
        ScheduleOutcome::new(ps, gantt)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive SJF)"
    }
}

/// Index of the arrived, unfinished process with the least remaining time.
fn select_shortest(ps: &[Process], now: Time) -> Option<usize> {
    ps.iter()
        .enumerate()
        .filter(|(_, p)| !p.is_finished() && p.has_arrived(now))
        .min_by_key(|(_, p)| (p.remaining_time, p.arrival_time, p.pid))
        .map(|(i, _)| i)
}

/// Earliest arrival among unfinished processes.
fn next_arrival(ps: &[Process]) -> Option<Time> {
    ps.iter()
        .filter(|p| !p.is_finished())
        .map(|p| p.arrival_time)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{procs, timeline};
    use crate::scheduler::ScheduleKpi;
    use crate::validation::check_outcome;

    #[test]
    fn test_srtf_worked_example() {
        let input = procs(&[(1, 0, 8, 0), (2, 1, 4, 0), (3, 2, 9, 0), (4, 3, 5, 0)]);
        let outcome = Srtf.schedule(&input);

        assert_eq!(
            timeline(&outcome),
            vec![(1, 0, 1), (2, 1, 5), (4, 5, 10), (1, 10, 17), (3, 17, 26)]
        );
        let kpi = ScheduleKpi::calculate(&outcome);
        assert!((kpi.avg_turnaround_time - 13.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 6.5).abs() < 1e-10);
        // RT: 0, 0, 15, 2
        assert!((kpi.avg_response_time - 4.25).abs() < 1e-10);
        assert!(check_outcome(&outcome, &input).is_ok());
    }

    #[test]
    fn test_srtf_remaining_tie_prefers_earlier_arrival() {
        // At t=2, P1 has 3 left and P2 needs 3: P1 arrived first and keeps the CPU.
        let input = procs(&[(1, 0, 5, 0), (2, 2, 3, 0)]);
        let outcome = Srtf.schedule(&input);
        assert_eq!(timeline(&outcome), vec![(1, 0, 5), (2, 5, 8)]);
    }

    #[test]
    fn test_srtf_full_tie_prefers_lower_pid() {
        let input = procs(&[(7, 0, 2, 0), (3, 0, 2, 0), (5, 0, 2, 0)]);
        let outcome = Srtf.schedule(&input);
        let order: Vec<_> = timeline(&outcome).iter().map(|s| s.0).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }

    #[test]
    fn test_srtf_idle_then_arrival() {
        let input = procs(&[(1, 4, 2, 0)]);
        let outcome = Srtf.schedule(&input);
        assert_eq!(timeline(&outcome), vec![(1, 4, 6)]);
        let p = outcome.process(1).unwrap();
        assert_eq!(p.start_time, Some(4));
        assert_eq!(p.completion_time, Some(6));
    }

    #[test]
    fn test_srtf_preempted_process_keeps_first_start() {
        let input = procs(&[(1, 0, 6, 0), (2, 1, 1, 0)]);
        let outcome = Srtf.schedule(&input);
        assert_eq!(timeline(&outcome), vec![(1, 0, 1), (2, 1, 2), (1, 2, 7)]);
        assert_eq!(outcome.process(1).unwrap().response_time(), Some(0));
        assert_eq!(outcome.process(1).unwrap().waiting_time(), Some(1));
    }

    #[test]
    fn test_srtf_running_is_shortest() {
        let input = procs(&[(1, 0, 7, 0), (2, 2, 4, 0), (3, 4, 1, 0), (4, 5, 4, 0)]);
        let outcome = Srtf.schedule(&input);
        assert!(check_outcome(&outcome, &input).is_ok());

        // Replay unit by unit: the holder of each unit never has more work
        // left than another arrived, unfinished process.
        let mut remaining: Vec<(i64, i64, i64)> =
            input.iter().map(|p| (p.pid, p.arrival_time, p.burst_time)).collect();
        for seg in outcome.gantt.iter() {
            for unit in seg.start..seg.end {
                let mine = remaining.iter().find(|r| r.0 == seg.pid).unwrap().2;
                assert!(remaining
                    .iter()
                    .filter(|r| r.1 <= unit && r.2 > 0)
                    .all(|r| mine <= r.2));
                remaining.iter_mut().find(|r| r.0 == seg.pid).unwrap().2 -= 1;
            }
        }
    }
}
