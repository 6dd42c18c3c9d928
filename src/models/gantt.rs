//! Gantt timeline model.
//!
//! A Gantt is the ordered list of CPU ownership intervals produced by one
//! scheduling run. Idle gaps are not represented.
//!
//! # Merge invariant
//! No two consecutive segments share a pid with touching boundaries.
//! [`Gantt::push`] maintains this on the fly by extending the last segment,
//! so the timeline is always in its finalized form.

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// One contiguous slice of CPU ownership: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that held the CPU.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: Time,
    /// End time (exclusive).
    pub end: Time,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(pid: Pid, start: Time, end: Time) -> Self {
        Self { pid, start, end }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether `next` continues this segment without a gap.
    #[inline]
    pub fn touches(&self, next: &Segment) -> bool {
        self.pid == next.pid && self.end == next.start
    }
}

/// Ordered, merged execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gantt {
    segments: Vec<Segment>,
}

impl Gantt {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `pid`, extending the last segment when the
    /// same pid continues without a gap. Empty intervals are ignored.
    pub fn push(&mut self, pid: Pid, start: Time, end: Time) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.end_time().map_or(true, |last| last <= start),
            "segment [{start}-{end}) for pid {pid} overlaps the timeline"
        );

        let segment = Segment::new(pid, start, end);
        match self.segments.last_mut() {
            Some(last) if last.touches(&segment) => last.end = end,
            _ => self.segments.push(segment),
        }
    }

    /// Builds a timeline from raw segments, merging touching same-pid runs.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut gantt = Self::new();
        for s in segments {
            gantt.push(s.pid, s.start, s.end);
        }
        gantt
    }

    /// The finalized segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment.
    pub fn end_time(&self) -> Option<Time> {
        self.segments.last().map(|s| s.end)
    }

    /// Total CPU time handed out (sum of segment durations).
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Total CPU time given to one pid.
    pub fn time_for(&self, pid: Pid) -> Time {
        self.segments
            .iter()
            .filter(|s| s.pid == pid)
            .map(Segment::duration)
            .sum()
    }

    /// Number of hand-overs between consecutive segments.
    pub fn context_switches(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

impl<'a> IntoIterator for &'a Gantt {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
