//! Report rendering.
//!
//! Two renderings of a finished run:
//!
//! - **Text**: Gantt line, per-process table sorted by pid, averages.
//! - **JSON**: the same data plus the full [`ScheduleKpi`].
//!
//! # Text layout
//!
//! ```text
//! Gantt:
//! [0-5]:P1  [5-8]:P2
//!
//! PID   AT      BT      PR        CT      TAT     WT      RT
//! 1     0       5       2         5       5       0       0
//! 2     2       3       1         8       6       3       3
//!
//! Averages ->  ATAT: 5.50  AWT: 1.50  ART: 1.50
//! ```
//!
//! Columns are left-aligned and padded (widths 6, 8, 8, 10, 8, 8, 8, 8), so
//! every header and row cell carries trailing spaces.

use serde::{Deserialize, Serialize};

use crate::models::{Pid, Process, ScheduleOutcome, Segment, Time};
use crate::scheduler::ScheduleKpi;

/// Renders the plain-text report.
pub fn render_text(outcome: &ScheduleOutcome) -> String {
    let kpi = ScheduleKpi::calculate(outcome);
    let mut out = String::from("Gantt:\n");

    for s in outcome.gantt.iter() {
        out.push_str(&format!("[{}-{}]:P{}  ", s.start, s.end, s.pid));
    }
    out.push_str("\n\n");

    out.push_str(&format!(
        "{:<6}{:<8}{:<8}{:<10}{:<8}{:<8}{:<8}{:<8}\n",
        "PID", "AT", "BT", "PR", "CT", "TAT", "WT", "RT"
    ));
    for p in outcome.processes_by_pid() {
        out.push_str(&format!(
            "{:<6}{:<8}{:<8}{:<10}{:<8}{:<8}{:<8}{:<8}\n",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.priority,
            cell(p.completion_time),
            cell(p.turnaround_time()),
            cell(p.waiting_time()),
            cell(p.response_time()),
        ));
    }

    out.push_str(&format!(
        "\nAverages ->  ATAT: {:.2}  AWT: {:.2}  ART: {:.2}\n",
        kpi.avg_turnaround_time, kpi.avg_waiting_time, kpi.avg_response_time
    ));
    out
}

fn cell(value: Option<Time>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// One table row of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRow {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time (AT).
    pub arrival_time: Time,
    /// Burst time (BT).
    pub burst_time: Time,
    /// Priority (PR), lower = more urgent.
    pub priority: i32,
    /// First dispatch time.
    pub start_time: Option<Time>,
    /// Completion time (CT).
    pub completion_time: Option<Time>,
    /// Turnaround time (TAT).
    pub turnaround_time: Option<Time>,
    /// Waiting time (WT).
    pub waiting_time: Option<Time>,
    /// Response time (RT).
    pub response_time: Option<Time>,
}

impl From<&Process> for ProcessRow {
    fn from(p: &Process) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority,
            start_time: p.start_time,
            completion_time: p.completion_time,
            turnaround_time: p.turnaround_time(),
            waiting_time: p.waiting_time(),
            response_time: p.response_time(),
        }
    }
}

/// Machine-readable report of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Algorithm name as given on the command line.
    pub algorithm: String,
    /// Merged timeline.
    pub gantt: Vec<Segment>,
    /// Rows sorted by pid.
    pub processes: Vec<ProcessRow>,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

impl Report {
    /// Builds a report from a finished run.
    pub fn new(algorithm: impl Into<String>, outcome: &ScheduleOutcome) -> Self {
        Self {
            algorithm: algorithm.into(),
            gantt: outcome.gantt.segments().to_vec(),
            processes: outcome
                .processes_by_pid()
                .into_iter()
                .map(ProcessRow::from)
                .collect(),
            kpi: ScheduleKpi::calculate(outcome),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
