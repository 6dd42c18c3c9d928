//! Schedule outcome model.
//!
//! The outcome of one policy run: the finished processes (in the order the
//! policy kept them) and the Gantt timeline it built.

use serde::{Deserialize, Serialize};

use super::{Gantt, Pid, Process, Time};

/// Result of a single scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Processes with their timing fields filled in.
    pub processes: Vec<Process>,
    /// Execution timeline.
    pub gantt: Gantt,
}

impl ScheduleOutcome {
    /// Creates an outcome from finished processes and their timeline.
    pub fn new(processes: Vec<Process>, gantt: Gantt) -> Self {
        Self { processes, gantt }
    }

    /// Processes sorted by ascending pid (stable for duplicate pids).
    pub fn processes_by_pid(&self) -> Vec<&Process> {
        let mut rows: Vec<&Process> = self.processes.iter().collect();
        rows.sort_by_key(|p| p.pid);
        rows
    }

    /// Finds the first process with the given pid.
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Whether every process has a completion time.
    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(|p| p.completion_time.is_some())
    }

    /// Latest completion time (0 for an empty run).
    pub fn makespan(&self) -> Time {
        self.processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
