//! Per-process statistics and the full simulation result.
//!
//! Completion, turnaround, and waiting time follow the standard
//! definitions: `turnaround = completion - arrival`,
//! `waiting = turnaround - burst`. For valid input both are non-negative,
//! which the `u64` representation makes structural.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::{Process, Tick, Timeline};

/// Final metrics for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStats {
    /// The process these metrics describe.
    pub process_id: u32,
    /// Tick at which the last burst tick finished.
    pub completion_time: Tick,
    /// Completion minus arrival.
    pub turnaround_time: Tick,
    /// Turnaround minus burst: ticks spent runnable but not running.
    pub waiting_time: Tick,
}

impl ProcessStats {
    /// Derives the record from a finished process.
    ///
    /// `completion_time` must be at least `arrival_time + burst_time`;
    /// every discipline guarantees this for validated input.
    pub fn from_completion(process: &Process, completion_time: Tick) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}

/// Everything one simulation run produced: the timeline, per-process
/// stats in input order, and the system-wide averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// Chronological execution timeline.
    pub schedule: Timeline,
    /// One entry per input process, in input order.
    pub stats: Vec<ProcessStats>,
    /// Arithmetic mean of all waiting times.
    pub average_waiting_time: f64,
    /// Arithmetic mean of all turnaround times.
    pub average_turnaround_time: f64,
}

impl SchedulingResult {
    /// Assembles the result, reducing per-process stats into averages.
    pub fn new(schedule: Timeline, stats: Vec<ProcessStats>) -> Self {
        let (average_waiting_time, average_turnaround_time) = if stats.is_empty() {
            (0.0, 0.0)
        } else {
            let waiting: Tick = stats.iter().map(|s| s.waiting_time).sum();
            let turnaround: Tick = stats.iter().map(|s| s.turnaround_time).sum();
            let n = stats.len() as f64;
            (waiting as f64 / n, turnaround as f64 / n)
        };

        Self {
            schedule,
            stats,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Stats entry for one process.
    pub fn stats_for(&self, process_id: u32) -> Option<&ProcessStats> {
        self.stats.iter().find(|s| s.process_id == process_id)
    }
}
