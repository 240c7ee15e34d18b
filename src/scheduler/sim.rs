//! Shared simulation state for the disciplines.
//!
//! [`RunState`] holds the engine-private working copies: each run clones
//! the batch's burst counters into `remaining` slots and advances a
//! monotonic clock. The caller's `Process` values are never touched, so a
//! batch can be replayed across disciplines.
//!
//! [`Recorder`] accumulates segments and completions and finalizes them
//! into a `SchedulingResult` with stats in input order.

use crate::models::{Process, ProcessStats, SchedulingResult, Segment, Tick, Timeline};

/// Working copy of one process: the immutable input plus the
/// remaining-burst counter the disciplines decrement.
#[derive(Debug, Clone, Copy)]
struct WorkItem {
    process: Process,
    remaining: Tick,
}

/// Mutable per-run simulation state over an immutable batch.
#[derive(Debug)]
pub(crate) struct RunState {
    items: Vec<WorkItem>,
    clock: Tick,
}

impl RunState {
    /// Copies the batch into fresh working state with the clock at 0.
    pub fn new(batch: &[Process]) -> Self {
        Self {
            items: batch
                .iter()
                .map(|&process| WorkItem {
                    process,
                    remaining: process.burst_time,
                })
                .collect(),
            clock: 0,
        }
    }

    /// Current simulation time.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, ticks: Tick) {
        self.clock += ticks;
    }

    /// Whether any process still needs CPU.
    pub fn any_unfinished(&self) -> bool {
        self.items.iter().any(|w| w.remaining > 0)
    }

    /// Whether the process at `index` has arrived and still needs CPU.
    pub fn is_available(&self, index: usize) -> bool {
        let w = &self.items[index];
        w.process.arrival_time <= self.clock && w.remaining > 0
    }

    /// Remaining burst of the process at `index`.
    pub fn remaining(&self, index: usize) -> Tick {
        self.items[index].remaining
    }

    /// Consumes `ticks` of the process's remaining burst.
    pub fn consume(&mut self, index: usize, ticks: Tick) {
        self.items[index].remaining -= ticks;
    }

    /// The immutable input process at `index`.
    pub fn process(&self, index: usize) -> &Process {
        &self.items[index].process
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Index of the available process with the minimum remaining time.
    /// Ties keep the earliest input position (strict `<` while scanning).
    pub fn shortest_available(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for index in 0..self.items.len() {
            if !self.is_available(index) {
                continue;
            }
            match best {
                Some(b) if self.items[index].remaining >= self.items[b].remaining => {}
                _ => best = Some(index),
            }
        }
        best
    }

    /// Index of the available process with the maximum priority.
    /// Ties keep the earliest input position (strict `>` while scanning).
    pub fn highest_priority_available(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for index in 0..self.items.len() {
            if !self.is_available(index) {
                continue;
            }
            match best {
                Some(b) if self.items[index].process.priority <= self.items[b].process.priority => {
                }
                _ => best = Some(index),
            }
        }
        best
    }
}

/// Output sink for one run: segments in execution order plus a
/// completion ledger keyed by input position.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    timeline: Timeline,
    completed: Vec<(usize, ProcessStats)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution segment.
    pub fn record_segment(&mut self, process_id: u32, start_time: Tick, end_time: Tick) {
        self.timeline
            .push(Segment::new(process_id, start_time, end_time));
    }

    /// Records that the process at input position `index` finished.
    pub fn record_completion(&mut self, index: usize, process: &Process, completion_time: Tick) {
        self.completed
            .push((index, ProcessStats::from_completion(process, completion_time)));
    }

    /// Finalizes into a result with stats in input order.
    pub fn finish(mut self) -> SchedulingResult {
        self.completed.sort_by_key(|&(index, _)| index);
        let stats = self.completed.into_iter().map(|(_, s)| s).collect();
        SchedulingResult::new(self.timeline, stats)
    }
}
