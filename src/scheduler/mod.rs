//! CPU scheduling policies and run metrics.
//!
//! Four single-CPU policies share the [`SchedulingPolicy`] trait. Each one
//! clones its input, advances its own discrete clock, fills in the timing
//! fields of every process and returns the outcome with its Gantt timeline.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival, then pid |
//! | [`Srtf`] | yes (every unit) | remaining time, then arrival, then pid |
//! | [`PriorityScheduler`] | no | priority, then arrival, then pid |
//! | [`RoundRobin`] | yes (quantum) | FIFO ready queue |
//!
//! # KPI
//!
//! `ScheduleKpi` derives the averages printed in the report together with
//! makespan, utilization, throughput and context switches.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod srtf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use srtf::Srtf;

use std::fmt::{self, Debug};

use clap::ValueEnum;

use crate::error::{Result, ScheduleError};
use crate::models::{Process, ScheduleOutcome};

/// A scheduling policy.
///
/// Implementations must be pure with respect to their input: the same slice
/// always yields the same outcome, and the caller's processes are never
/// touched.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes`.
    fn schedule(&self, processes: &[Process]) -> ScheduleOutcome;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selectable algorithm, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// First-come-first-served
    Fcfs,
    /// Shortest remaining time first (preemptive)
    Sjf,
    /// Non-preemptive priority, lower value first
    Priority,
    /// Round robin, requires QUANTUM
    #[value(name = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Command-line name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Builds the policy. Round robin requires a positive `quantum`; the
    /// other algorithms ignore it.
    pub fn policy(&self, quantum: Option<i64>) -> Result<Box<dyn SchedulingPolicy>> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Srtf),
            Algorithm::Priority => Box::new(PriorityScheduler),
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or(ScheduleError::MissingQuantum)?;
                Box::new(RoundRobin::new(quantum)?)
            }
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clones the input with all simulation state cleared.
pub(crate) fn fresh_copy(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .cloned()
        .map(|mut p| {
            p.reset();
            p
        })
        .collect()
}
