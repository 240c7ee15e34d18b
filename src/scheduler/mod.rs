//! Scheduling disciplines and run metrics.
//!
//! Four classical single-CPU disciplines, each a pure function from a
//! validated process batch to a [`SchedulingResult`]:
//!
//! - [`fcfs`]: first-come-first-serve
//! - [`sjf`]: shortest-job-first, non-preemptive or preemptive (SRTF)
//! - [`priority`]: static priority, non-preemptive
//! - [`round_robin`]: fixed time quantum
//!
//! [`Discipline`] selects between them by value or by stable string key.
//! Runs share the discrete-time-advance pattern (`sim`) and never mutate
//! the caller's batch. [`RunKpi`] derives comparison metrics from a
//! finished result.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7: Scheduling

mod fcfs;
mod metrics;
mod priority;
mod round_robin;
mod sim;
mod sjf;

pub use fcfs::fcfs;
pub use metrics::RunKpi;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SchedulingResult, Tick};
use crate::validation::{validate_batch, ValidationError};

/// Quantum used when round robin is selected by its bare `"rr"` key.
pub const DEFAULT_QUANTUM: Tick = 2;

/// Scheduling engine errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The batch failed one or more input checks.
    #[error("invalid process batch: {}", describe(.0))]
    InvalidBatch(Vec<ValidationError>),
    /// Round robin was given a zero quantum.
    #[error("time quantum must be at least 1")]
    InvalidQuantum,
    /// A discipline key failed to parse.
    #[error("unknown scheduling discipline '{0}'")]
    UnknownDiscipline(String),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Shared fail-fast guard run by every discipline entry point.
pub(crate) fn check_batch(batch: &[Process]) -> Result<(), Error> {
    validate_batch(batch).map_err(Error::InvalidBatch)
}

/// Selector over the runnable configurations.
///
/// `Sjf` and `Srtf` share one engine behind the preemptive flag. The
/// string keys (`"fcfs"`, `"sjf"`, `"srtf"`, `"priority"`, `"rr"`) are
/// stable and round-trip through `FromStr`/`Display`.
///
/// # Example
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::Discipline;
///
/// let discipline: Discipline = "rr".parse().unwrap();
/// assert_eq!(discipline, Discipline::RoundRobin { quantum: 2 });
///
/// let batch = vec![Process::new(1, 0, 4), Process::new(2, 0, 3)];
/// let result = discipline.run(&batch).unwrap();
/// assert_eq!(result.schedule.makespan(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// First-come-first-serve.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Shortest-remaining-time-first (preemptive SJF).
    Srtf,
    /// Static priority, non-preemptive.
    Priority,
    /// Round robin with a fixed quantum.
    RoundRobin {
        /// Time slice per turn, at least 1.
        quantum: Tick,
    },
}

impl Discipline {
    /// Runs the batch under this discipline.
    pub fn run(&self, batch: &[Process]) -> Result<SchedulingResult, Error> {
        match *self {
            Discipline::Fcfs => fcfs(batch),
            Discipline::Sjf => sjf(batch, false),
            Discipline::Srtf => sjf(batch, true),
            Discipline::Priority => priority(batch),
            Discipline::RoundRobin { quantum } => round_robin(batch, quantum),
        }
    }

    /// Stable selection key.
    pub fn key(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "fcfs",
            Discipline::Sjf => "sjf",
            Discipline::Srtf => "srtf",
            Discipline::Priority => "priority",
            Discipline::RoundRobin { .. } => "rr",
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::Priority => "Priority",
            Discipline::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First Come First Serve (FCFS)",
            Discipline::Sjf => "Shortest Job First (Non-preemptive)",
            Discipline::Srtf => "Shortest Remaining Time First (Preemptive)",
            Discipline::Priority => "Priority Scheduling",
            Discipline::RoundRobin { .. } => "Round Robin",
        }
    }
}

impl FromStr for Discipline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Discipline::Fcfs),
            "sjf" => Ok(Discipline::Sjf),
            "srtf" => Ok(Discipline::Srtf),
            "priority" => Ok(Discipline::Priority),
            "rr" => Ok(Discipline::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            other => Err(Error::UnknownDiscipline(other.to_string())),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{random_batch, WorkloadSpec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_disciplines() -> Vec<Discipline> {
        vec![
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Srtf,
            Discipline::Priority,
            Discipline::RoundRobin { quantum: 1 },
            Discipline::RoundRobin { quantum: 3 },
        ]
    }

    #[test]
    fn test_key_round_trip() {
        for d in [
            Discipline::Fcfs,
            Discipline::Sjf,
            Discipline::Srtf,
            Discipline::Priority,
        ] {
            assert_eq!(d.key().parse::<Discipline>().unwrap(), d);
        }
        assert_eq!(
            "rr".parse::<Discipline>().unwrap(),
            Discipline::RoundRobin {
                quantum: DEFAULT_QUANTUM
            }
        );
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            "mlfq".parse::<Discipline>(),
            Err(Error::UnknownDiscipline(_))
        ));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Discipline::RoundRobin { quantum: 4 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":4}"#);
        let back: Discipline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Discipline::RoundRobin { quantum: 4 });
    }

    #[test]
    fn test_run_dispatch_matches_direct_calls() {
        let batch = vec![
            Process::new(1, 0, 8).with_priority(1),
            Process::new(2, 1, 4).with_priority(7),
        ];
        assert_eq!(Discipline::Fcfs.run(&batch).unwrap(), fcfs(&batch).unwrap());
        assert_eq!(
            Discipline::Sjf.run(&batch).unwrap(),
            sjf(&batch, false).unwrap()
        );
        assert_eq!(
            Discipline::Srtf.run(&batch).unwrap(),
            sjf(&batch, true).unwrap()
        );
        assert_eq!(
            Discipline::Priority.run(&batch).unwrap(),
            priority(&batch).unwrap()
        );
        assert_eq!(
            Discipline::RoundRobin { quantum: 2 }.run(&batch).unwrap(),
            round_robin(&batch, 2).unwrap()
        );
    }

    #[test]
    fn test_random_workloads_conserve_work() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..20 {
            let batch = random_batch(&mut rng, &WorkloadSpec::default());
            for d in all_disciplines() {
                let result = d.run(&batch).unwrap();
                for p in &batch {
                    assert_eq!(
                        result.schedule.busy_time_for(p.id),
                        p.burst_time,
                        "work conservation broken: round {round}, {d}, process {}",
                        p.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_workloads_never_run_before_arrival() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let batch = random_batch(&mut rng, &WorkloadSpec::default());
            for d in all_disciplines() {
                let result = d.run(&batch).unwrap();
                for segment in result.schedule.segments() {
                    let arrival = batch
                        .iter()
                        .find(|p| p.id == segment.process_id)
                        .map(|p| p.arrival_time)
                        .unwrap();
                    assert!(segment.start_time >= arrival, "{d}: premature segment");
                }
            }
        }
    }

    #[test]
    fn test_random_workloads_stay_chronological() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..20 {
            let batch = random_batch(&mut rng, &WorkloadSpec::default());
            for d in all_disciplines() {
                let result = d.run(&batch).unwrap();
                assert!(result.schedule.is_chronological(), "{d}: overlap");
                for segment in result.schedule.segments() {
                    assert!(segment.start_time < segment.end_time, "{d}: empty segment");
                }
            }
        }
    }

    #[test]
    fn test_random_workloads_turnaround_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..20 {
            let batch = random_batch(&mut rng, &WorkloadSpec::default());
            for d in all_disciplines() {
                let result = d.run(&batch).unwrap();
                assert_eq!(result.stats.len(), batch.len());
                for (p, s) in batch.iter().zip(&result.stats) {
                    // Stats come back in input order
                    assert_eq!(p.id, s.process_id);
                    assert!(s.turnaround_time >= p.burst_time);
                    assert_eq!(s.waiting_time, s.turnaround_time - p.burst_time);
                }
            }
        }
    }

    #[test]
    fn test_runs_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(19);
        let batch = random_batch(&mut rng, &WorkloadSpec::default());
        for d in all_disciplines() {
            let first = d.run(&batch).unwrap();
            let second = d.run(&batch).unwrap();
            assert_eq!(first, second, "{d}: rerun diverged");
        }
    }
}
