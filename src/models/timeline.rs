//! Execution timeline (simulation output) model.
//!
//! A timeline is the ordered sequence of CPU allocations a discipline
//! produced: who owned the CPU, from when to when. Preemptive disciplines
//! and round robin emit several segments per process; their durations sum
//! to the process's burst time.

use serde::{Deserialize, Serialize};

use super::Tick;

/// One contiguous CPU allocation: `process_id` owns the CPU for the
/// half-open tick interval `[start_time, end_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Owning process.
    pub process_id: u32,
    /// First tick of the allocation.
    pub start_time: Tick,
    /// First tick past the allocation.
    pub end_time: Tick,
}

impl Segment {
    /// Creates a segment.
    pub fn new(process_id: u32, start_time: Tick, end_time: Tick) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
        }
    }

    /// Ticks covered (end - start).
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end_time - self.start_time
    }
}

/// A complete execution timeline, chronological by start time.
///
/// Serializes as a bare segment array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Latest end time across all segments; 0 when empty.
    pub fn makespan(&self) -> Tick {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// All segments, in execution order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segments owned by one process.
    pub fn segments_for(&self, process_id: u32) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total ticks the CPU was allocated (idle gaps excluded).
    pub fn busy_time(&self) -> Tick {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total ticks allocated to one process.
    pub fn busy_time_for(&self, process_id: u32) -> Tick {
        self.segments_for(process_id)
            .iter()
            .map(|s| s.duration())
            .sum()
    }

    /// Whether segments are non-overlapping and in non-decreasing start
    /// order. Every discipline produces a chronological timeline.
    pub fn is_chronological(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[0].end_time <= w[1].start_time)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
