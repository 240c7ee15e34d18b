//! Round robin with a fixed time quantum.
//!
//! Repeated linear scans over the batch in input order. Each eligible
//! process runs for `min(quantum, remaining)` ticks as one segment. The
//! clock is live within a pass: a process arriving while an earlier slot
//! executes is picked up in the same pass if its slot has not been visited
//! yet. A full pass with no eligible process advances the clock one tick.
//!
//! Adjacent segments of the same process (the only-runnable case) stay
//! separate, one per quantum.

use log::debug;

use super::{check_batch, sim::Recorder, sim::RunState, Error};
use crate::models::{Process, SchedulingResult, Tick};

/// Runs the batch under round robin. `quantum` must be at least 1; the
/// engine rejects zero rather than clamping.
pub fn round_robin(batch: &[Process], quantum: Tick) -> Result<SchedulingResult, Error> {
    if quantum == 0 {
        return Err(Error::InvalidQuantum);
    }
    check_batch(batch)?;
    debug!(
        "round_robin: simulating {} processes (quantum: {quantum})",
        batch.len()
    );

    let mut state = RunState::new(batch);
    let mut recorder = Recorder::new();

    while state.any_unfinished() {
        let mut ran_any = false;

        for index in 0..state.len() {
            if !state.is_available(index) {
                continue;
            }

            let slice = quantum.min(state.remaining(index));
            let start = state.clock();
            state.consume(index, slice);
            state.advance(slice);
            recorder.record_segment(state.process(index).id, start, state.clock());
            ran_any = true;

            if state.remaining(index) == 0 {
                recorder.record_completion(index, state.process(index), state.clock());
            }
        }

        if !ran_any {
            state.advance(1);
        }
    }

    Ok(recorder.finish())
}
