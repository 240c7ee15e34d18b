//! Process (simulation input) model.
//!
//! A process is the unit of CPU demand: it becomes eligible at a fixed
//! arrival tick and needs a fixed number of CPU ticks. Its fields never
//! change during a run; the engine keeps its own remaining-time counter
//! (see `scheduler`), so one batch can be replayed across disciplines for
//! comparison.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// Simulation time unit. The clock starts at 0 and only moves forward.
pub type Tick = u64;

/// A process to be scheduled.
///
/// # Id Invariant
/// Ids within a batch must be exactly `{1..N}` — contiguous, no gaps, no
/// duplicates. `validation::validate_batch` rejects anything else before a
/// simulation starts; [`Batch`] maintains the invariant constructively
/// when the list is edited interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Batch-unique identifier, 1-based.
    pub id: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total CPU ticks required. Must be at least 1.
    pub burst_time: Tick,
    /// Static priority; higher value wins. Read only by the priority
    /// discipline.
    pub priority: i32,
}

impl Process {
    /// Creates a process with the default priority (1).
    pub fn new(id: u32, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 1,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// An editable process list that keeps the id invariant.
///
/// `push` assigns id `N + 1`; `remove` renumbers the tail so ids stay
/// `{1..N}`. Field edits through [`Batch::get_mut`] are unchecked;
/// engine-side validation remains the backstop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    processes: Vec<Process>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process and returns its assigned id.
    pub fn push(&mut self, arrival_time: Tick, burst_time: Tick, priority: i32) -> u32 {
        let id = self.processes.len() as u32 + 1;
        self.processes.push(Process {
            id,
            arrival_time,
            burst_time,
            priority,
        });
        id
    }

    /// Appends a process with editor defaults: arrival 0, burst 1,
    /// priority 1.
    pub fn push_default(&mut self) -> u32 {
        self.push(0, 1, 1)
    }

    /// Removes a process by id and renumbers the ones after it.
    ///
    /// Returns `false` if no process had that id.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(pos) = self.processes.iter().position(|p| p.id == id) else {
            return false;
        };
        self.processes.remove(pos);
        for (i, p) in self.processes.iter_mut().enumerate() {
            p.id = i as u32 + 1;
        }
        true
    }

    /// Mutable access to a process by id.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.id == id)
    }

    /// The process list, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Consumes the batch, yielding the process list.
    pub fn into_vec(self) -> Vec<Process> {
        self.processes
    }
}
