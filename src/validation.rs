//! Input validation and outcome checks.
//!
//! Two families of checks:
//!
//! - [`validate_processes`] runs before a simulation and rejects records a
//!   policy cannot simulate (negative arrival, non-positive burst, a
//!   workload whose end time overflows the clock).
//!   Duplicate pids are not reported: policies index processes by position.
//! - [`check_outcome`] runs after a simulation and verifies the timeline
//!   invariants every policy must uphold:
//!   1. CPU time conservation (segment total = burst total, per pid too)
//!   2. Segments non-empty, time-ordered and non-overlapping
//!   3. Merge invariant (no touching same-pid neighbours)
//!   4. Every process completed, start >= arrival, completion > start

use std::collections::HashMap;

use crate::models::{Pid, Process, ScheduleOutcome, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit the clock.
    TimeOverflow,
    /// Segment durations do not add up to the burst times.
    TimeNotConserved,
    /// A segment is empty or overlaps / precedes its predecessor.
    SegmentOrder,
    /// Two touching neighbours share a pid.
    UnmergedSegments,
    /// A process has no start or completion, or they contradict its arrival.
    IncompleteProcess,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates process records before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("process {} has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process {} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }
    }

    // Every policy finishes by max(arrival) + sum(burst).
    let horizon = processes
        .iter()
        .try_fold(0 as Time, |total, p| total.checked_add(p.burst_time.max(0)))
        .and_then(|total| {
            let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
            latest.max(0).checked_add(total)
        });
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "latest arrival plus total burst time exceeds the clock range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the invariants of a finished run against its input.
pub fn check_outcome(outcome: &ScheduleOutcome, input: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    // Conservation
    let burst_total: Time = input.iter().map(|p| p.burst_time).sum();
    let busy = outcome.gantt.busy_time();
    if busy != burst_total {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeNotConserved,
            format!("timeline holds {busy} units, bursts total {burst_total}"),
        ));
    }

    let mut expected: HashMap<Pid, Time> = HashMap::new();
    for p in input {
        *expected.entry(p.pid).or_insert(0) += p.burst_time;
    }
    for (&pid, &burst) in &expected {
        let got = outcome.gantt.time_for(pid);
        if got != burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeNotConserved,
                format!("pid {pid} received {got} units, needs {burst}"),
            ));
        }
    }

    // Ordering and merge invariant
    let segments = outcome.gantt.segments();
    for s in segments {
        if s.end <= s.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::SegmentOrder,
                format!("empty segment [{}-{}] for pid {}", s.start, s.end, s.pid),
            ));
        }
    }
    for pair in segments.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start < prev.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::SegmentOrder,
                format!(
                    "segment [{}-{}]:P{} overlaps [{}-{}]:P{}",
                    next.start, next.end, next.pid, prev.start, prev.end, prev.pid
                ),
            ));
        }
        if prev.touches(next) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnmergedSegments,
                format!("pid {} has touching segments at {}", prev.pid, prev.end),
            ));
        }
    }

    // Per-process metrics
    if outcome.processes.len() != input.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::IncompleteProcess,
            format!(
                "outcome has {} processes, input has {}",
                outcome.processes.len(),
                input.len()
            ),
        ));
    }
    for p in &outcome.processes {
        match (p.start_time, p.completion_time) {
            (Some(start), Some(end)) if start >= p.arrival_time && end > start => {}
            (start, end) => errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteProcess,
                format!(
                    "pid {} has start {:?} and completion {:?} with arrival {}",
                    p.pid, start, end, p.arrival_time
                ),
            )),
        }
        if p.remaining_time != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteProcess,
                format!("pid {} still has {} units left", p.pid, p.remaining_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gantt;

    fn finished(pid: Pid, arrival: Time, burst: Time, start: Time) -> Process {
        let mut p = Process::new(pid, arrival, burst, 0);
        p.dispatch(start);
        p.run_for(burst);
        p.complete(start + burst);
        p
    }

    #[test]
    fn test_valid_processes() {
        let ps = vec![Process::new(1, 0, 5, 2), Process::new(2, 3, 1, 0)];
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new(1, -1, 5, 0)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let errors =
            validate_processes(&[Process::new(1, 0, 0, 0), Process::new(2, 0, -3, 0)]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_time_overflow() {
        let errors = validate_processes(&[Process::new(1, Time::MAX, 1, 0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let errors =
            validate_processes(&[Process::new(1, 0, Time::MAX, 0), Process::new(2, 0, 1, 0)])
                .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        assert!(validate_processes(&[Process::new(1, Time::MAX - 1, 1, 0)]).is_ok());
    }

    #[test]
    fn test_duplicate_pids_allowed() {
        let ps = vec![Process::new(1, 0, 1, 0), Process::new(1, 0, 1, 0)];
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_check_outcome_ok() {
        let input = vec![Process::new(1, 0, 2, 0), Process::new(2, 1, 3, 0)];
        let mut gantt = Gantt::new();
        gantt.push(1, 0, 2);
        gantt.push(2, 2, 5);
        let outcome = ScheduleOutcome::new(vec![finished(1, 0, 2, 0), finished(2, 1, 3, 2)], gantt);
        assert!(check_outcome(&outcome, &input).is_ok());
    }

    #[test]
    fn test_check_outcome_lost_time() {
        let input = vec![Process::new(1, 0, 2, 0)];
        let mut gantt = Gantt::new();
        gantt.push(1, 0, 1);
        let outcome = ScheduleOutcome::new(vec![finished(1, 0, 2, 0)], gantt);
        let errors = check_outcome(&outcome, &input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimeNotConserved));
    }

    #[test]
    fn test_check_outcome_incomplete() {
        let input = vec![Process::new(1, 0, 2, 0)];
        let mut gantt = Gantt::new();
        gantt.push(1, 0, 2);
        let outcome = ScheduleOutcome::new(vec![Process::new(1, 0, 2, 0)], gantt);
        let errors = check_outcome(&outcome, &input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IncompleteProcess));
    }
}
