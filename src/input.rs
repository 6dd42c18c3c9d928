//! Process record parser.
//!
//! Reads the whitespace-delimited workload format:
//!
//! ```text
//! N
//! pid arrival burst priority   (N records)
//! ```
//!
//! Line breaks carry no meaning; tokens are consumed in order. Tokens after
//! the N-th record are ignored.

use std::io::Read;

use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::Process;
use crate::validation::validate_processes;

const FIELDS: [&str; 4] = ["pid", "arrival time", "burst time", "priority"];

const MAX_PREALLOC: usize = 1024;

/// Parses process records from text without validating them.
pub fn parse_processes(text: &str) -> Result<Vec<Process>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| ScheduleError::parse("missing process count"))?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ScheduleError::parse(format!("invalid process count '{count_token}'")))?;

    // The count is untrusted; short input surfaces as a missing field.
    let mut processes = Vec::with_capacity(count.min(MAX_PREALLOC));
    for record in 1..=count {
        let mut values = [0i64; 4];
        for (slot, field) in values.iter_mut().zip(FIELDS) {
            let token = tokens.next().ok_or_else(|| {
                ScheduleError::parse(format!("record {record}: missing {field}"))
            })?;
            *slot = token.parse().map_err(|_| {
                ScheduleError::parse(format!("record {record}: invalid {field} '{token}'"))
            })?;
        }
        let [pid, arrival, burst, priority] = values;
        let priority = i32::try_from(priority).map_err(|_| {
            ScheduleError::parse(format!("record {record}: priority {priority} out of range"))
        })?;
        processes.push(Process::new(pid, arrival, burst, priority));
    }

    debug!(count, "parsed process records");
    Ok(processes)
}

/// Parses and validates process records.
pub fn load_processes(text: &str) -> Result<Vec<Process>> {
    let processes = parse_processes(text)?;
    validate_processes(&processes).map_err(ScheduleError::InvalidProcess)?;
    Ok(processes)
}

/// Reads a whole stream, then parses and validates it.
pub fn read_processes<R: Read>(mut reader: R) -> Result<Vec<Process>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_processes(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let ps = parse_processes("2\n1 0 5 2\n2 2 3 1\n").unwrap();
        assert_eq!(ps, vec![Process::new(1, 0, 5, 2), Process::new(2, 2, 3, 1)]);
    }

    #[test]
    fn test_parse_ignores_layout() {
        let ps = parse_processes("  2 1 0\t5 2 2\n\n2 3 1 trailing junk").unwrap();
        assert_eq!(ps.len(), 2);
        assert_eq!(ps[1].burst_time, 3);
    }

    #[test]
    fn test_parse_empty_count() {
        assert!(parse_processes("0").unwrap().is_empty());
    }

    #[test]
    fn test_missing_count() {
        let err = parse_processes("   ").unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn test_negative_count() {
        let err = parse_processes("-1").unwrap_err();
        assert!(err.to_string().contains("invalid process count"));
    }

    #[test]
    fn test_short_input() {
        let err = parse_processes("2\n1 0 5 2\n2 2").unwrap_err();
        assert_eq!(err.to_string(), "input parse error: record 2: missing priority");
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_processes("1\n1 x 5 2").unwrap_err();
        assert!(err.to_string().contains("invalid arrival time 'x'"));
    }

    #[test]
    fn test_huge_count_with_short_input() {
        let err = parse_processes("1000000000000000000\n1 0 1 0").unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
        assert!(err.to_string().contains("record 2: missing pid"));
    }

    #[test]
    fn test_load_rejects_zero_burst() {
        let err = load_processes("1\n1 0 0 2").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidProcess(_)));
    }

    #[test]
    fn test_load_rejects_clock_overflow() {
        let err = load_processes("1\n1 9223372036854775807 1 0").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidProcess(_)));
    }

    #[test]
    fn test_read_from_reader() {
        let ps = read_processes("1\n9 4 2 0".as_bytes()).unwrap();
        assert_eq!(ps, vec![Process::new(9, 4, 2, 0)]);
    }
}
