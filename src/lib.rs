//! CPU scheduling simulation core.
//!
//! Computes execution timelines and per-process statistics for a fixed
//! batch of processes under classical single-CPU dispatch disciplines:
//! first-come-first-serve, shortest-job-first (non-preemptive and
//! preemptive/SRTF), static priority, and round robin with a fixed
//! quantum.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Process`, `Batch`, `Segment`,
//!   `Timeline`, `ProcessStats`, `SchedulingResult`
//! - **`validation`**: fail-fast input checks (batch shape, id contiguity)
//! - **`scheduler`**: the four disciplines, the `Discipline` selector,
//!   and run KPIs
//! - **`layout`**: proportional spans and stable display colors for
//!   timeline renderers
//! - **`workload`**: random batch generation
//!
//! # Architecture
//!
//! The engine is pure and synchronous. Each run copies the batch's burst
//! counters into private working state, simulates, and returns an
//! immutable result; the caller's `Process` values are never touched, so
//! one batch can be replayed across disciplines for comparison.
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler::fcfs;
//!
//! let batch = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let result = fcfs(&batch).unwrap();
//!
//! assert_eq!(result.schedule.makespan(), 8);
//! assert_eq!(result.average_waiting_time, 2.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod layout;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
