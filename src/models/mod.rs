//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling policy.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term |
//! |--------------|---------------|
//! | Process | Process control block (timing fields only) |
//! | Segment | Gantt chart bar |
//! | Gantt | Gantt chart |
//! | ScheduleOutcome | Completed simulation run |

mod gantt;
mod process;
mod schedule;

pub use gantt::{Gantt, Segment};
pub use process::{sort_by_arrival, Pid, Process, Time};
pub use schedule::ScheduleOutcome;
