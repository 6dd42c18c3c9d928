//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling policies over a fixed workload
//! of processes and reports the resulting Gantt timeline and timing metrics.
//! Every run is a deterministic, single-threaded discrete-time simulation.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `Gantt`,
//!   `ScheduleOutcome`
//! - **`scheduler`**: Policies (`Fcfs`, `Srtf`, `PriorityScheduler`,
//!   `RoundRobin`), algorithm selection and `ScheduleKpi`
//! - **`input`**: Whitespace-delimited workload parser
//! - **`validation`**: Input checks and timeline invariant checks
//! - **`report`**: Text and JSON report rendering
//!
//! # Example
//!
//! ```
//! use cpu_schedule::input::load_processes;
//! use cpu_schedule::report::render_text;
//! use cpu_schedule::scheduler::Algorithm;
//!
//! let processes = load_processes("2\n1 0 3 0\n2 1 2 0\n").unwrap();
//! let policy = Algorithm::RoundRobin.policy(Some(2)).unwrap();
//! let outcome = policy.schedule(&processes);
//! assert!(render_text(&outcome).starts_with("Gantt:\n[0-2]:P1  [2-4]:P2  [4-5]:P1  "));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
pub use scheduler::{Algorithm, SchedulingPolicy};
