//! Random workload generation.
//!
//! Produces validated batches with bounded random arrivals, bursts, and
//! priorities for demos, discipline comparisons, and randomized invariant
//! tests. Ids are assigned `1..=N`, so generated batches always pass
//! validation.

use rand::Rng;

use crate::models::{Process, Tick};

/// Bounds for generated workloads.
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub size: usize,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: Tick,
    /// Largest possible burst (inclusive); bursts are drawn from `1..=max`.
    pub max_burst: Tick,
    /// Largest possible priority (inclusive); drawn from `1..=max`.
    pub max_priority: i32,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            size: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadSpec {
    /// Sets the batch size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest possible burst.
    pub fn with_max_burst(mut self, max_burst: Tick) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest possible priority.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a batch within the spec's bounds.
///
/// Pass a seeded generator for reproducible workloads.
pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, spec: &WorkloadSpec) -> Vec<Process> {
    (1..=spec.size)
        .map(|id| {
            Process::new(
                id as u32,
                rng.random_range(0..=spec.max_arrival),
                rng.random_range(1..=spec.max_burst.max(1)),
            )
            .with_priority(rng.random_range(1..=spec.max_priority.max(1)))
        })
        .collect()
}
