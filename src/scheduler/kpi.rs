//! Run quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | ATAT | Mean of completion - arrival |
//! | AWT | Mean of turnaround - burst |
//! | ART | Mean of first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | Busy / Idle | CPU time handed out / not handed out in [0, makespan) |
//! | Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Context switches | Hand-overs between consecutive Gantt segments |
//!
//! # Reference
//! Silberschatz et al., "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleOutcome, Time};

/// Run performance indicators.
///
/// All averages are simple arithmetic means over every process; an empty
/// run reports zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Average turnaround time.
    pub avg_turnaround_time: f64,
    /// Average waiting time.
    pub avg_waiting_time: f64,
    /// Average response time.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub makespan: Time,
    /// CPU time spent running processes.
    pub busy_time: Time,
    /// CPU time spent idle before the makespan.
    pub idle_time: Time,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of hand-overs in the timeline.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;
        let mut total_response: f64 = 0.0;

        for p in &outcome.processes {
            total_turnaround += p.turnaround_time().unwrap_or(0) as f64;
            total_waiting += p.waiting_time().unwrap_or(0) as f64;
            total_response += p.response_time().unwrap_or(0) as f64;
        }

        let count = outcome.processes.len();
        let mean = |total: f64| {
            if count == 0 {
                0.0
            } else {
                total / count as f64
            }
        };

        let makespan = outcome.makespan();
        let busy_time = outcome.gantt.busy_time();
        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            avg_turnaround_time: mean(total_turnaround),
            avg_waiting_time: mean(total_waiting),
            avg_response_time: mean(total_response),
            makespan,
            busy_time,
            idle_time: (makespan - busy_time).max(0),
            cpu_utilization,
            throughput,
            context_switches: outcome.gantt.context_switches(),
        }
    }
}
