//! Static-priority scheduling, non-preemptive.
//!
//! Driven at decision points rather than every tick: whenever the CPU is
//! free, the available process with the maximum priority (earliest input
//! position on ties) runs to completion in one jump. A higher-priority
//! process arriving mid-burst waits: once selected, a process cannot be
//! displaced.

use log::debug;

use super::{check_batch, sim::Recorder, sim::RunState, Error};
use crate::models::{Process, SchedulingResult};

/// Runs the batch under non-preemptive highest-priority-first.
pub fn priority(batch: &[Process]) -> Result<SchedulingResult, Error> {
    check_batch(batch)?;
    debug!("priority: simulating {} processes", batch.len());

    let mut state = RunState::new(batch);
    let mut recorder = Recorder::new();

    while state.any_unfinished() {
        let Some(chosen) = state.highest_priority_available() else {
            state.advance(1);
            continue;
        };

        let start = state.clock();
        let run = state.remaining(chosen);
        state.consume(chosen, run);
        state.advance(run);

        recorder.record_segment(state.process(chosen).id, start, state.clock());
        recorder.record_completion(chosen, state.process(chosen), state.clock());
    }

    Ok(recorder.finish())
}
