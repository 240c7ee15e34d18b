//! Run quality metrics.
//!
//! Indicators derived from a finished [`SchedulingResult`], useful when
//! comparing disciplines over the same batch.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Final end time of the timeline |
//! | CPU Utilization | Busy ticks / makespan (idle gaps reduce it) |
//! | Throughput | Processes completed per tick |
//! | Max Waiting | Worst single waiting time |
//! | Context Switches | Adjacent segment pairs with different owners |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{SchedulingResult, Tick};

/// Run performance indicators.
#[derive(Debug, Clone)]
pub struct RunKpi {
    /// Final end time of the timeline.
    pub makespan: Tick,
    /// Fraction of the makespan the CPU was allocated (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Mean waiting time (copied from the result).
    pub average_waiting_time: f64,
    /// Mean turnaround time (copied from the result).
    pub average_turnaround_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: Tick,
    /// Number of owner changes along the timeline.
    pub context_switches: usize,
}

impl RunKpi {
    /// Computes KPIs from a finished result.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let makespan = result.schedule.makespan();

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                result.schedule.busy_time() as f64 / makespan as f64,
                result.stats.len() as f64 / makespan as f64,
            )
        };

        let max_waiting_time = result
            .stats
            .iter()
            .map(|s| s.waiting_time)
            .max()
            .unwrap_or(0);

        let context_switches = result
            .schedule
            .segments()
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        Self {
            makespan,
            cpu_utilization,
            throughput,
            average_waiting_time: result.average_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            max_waiting_time,
            context_switches,
        }
    }
}
