//! Shortest-Job-First, non-preemptive and preemptive (SRTF).
//!
//! One tick-driven simulation serves both modes. Each tick the available
//! set is `arrival <= clock && remaining > 0`. The CPU switches owner when
//! nothing is running, or (preemptive mode only) when some available
//! process has strictly less remaining time than the current owner. The
//! switch target is always the available process with the globally minimum
//! remaining time, earliest input position on ties. A switch closes the
//! previous owner's segment at the current tick.
//!
//! Non-preemptive mode never re-evaluates mid-burst (the preemption test
//! is simply never true), so a chosen process runs to completion.

use log::debug;

use super::{check_batch, sim::Recorder, sim::RunState, Error};
use crate::models::{Process, SchedulingResult, Tick};

/// Runs the batch under SJF. With `preemptive` set this is SRTF.
pub fn sjf(batch: &[Process], preemptive: bool) -> Result<SchedulingResult, Error> {
    check_batch(batch)?;
    debug!(
        "sjf: simulating {} processes (preemptive: {preemptive})",
        batch.len()
    );

    let mut state = RunState::new(batch);
    let mut recorder = Recorder::new();
    let mut running: Option<usize> = None;
    let mut segment_start: Tick = 0;

    while state.any_unfinished() {
        let Some(candidate) = state.shortest_available() else {
            state.advance(1);
            continue;
        };

        let current = match running {
            // Keep the CPU: no owner change unless preemptive and the
            // candidate is strictly shorter.
            Some(current)
                if !preemptive || state.remaining(candidate) >= state.remaining(current) =>
            {
                current
            }
            previous => {
                if let Some(previous) = previous {
                    recorder.record_segment(
                        state.process(previous).id,
                        segment_start,
                        state.clock(),
                    );
                }
                segment_start = state.clock();
                running = Some(candidate);
                candidate
            }
        };

        state.consume(current, 1);
        if state.remaining(current) == 0 {
            let end = state.clock() + 1;
            recorder.record_segment(state.process(current).id, segment_start, end);
            recorder.record_completion(current, state.process(current), end);
            running = None;
        }

        state.advance(1);
    }

    Ok(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let batch = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        let result = sjf(&batch, true).unwrap();

        // Process 1 loses the CPU at tick 1 (remaining 7 > 4), process 2
        // runs to completion at tick 5, process 1 resumes until tick 12.
        assert_eq!(
            result.schedule.segments(),
            &[
                Segment::new(1, 0, 1),
                Segment::new(2, 1, 5),
                Segment::new(1, 5, 12),
            ]
        );
        assert_eq!(result.stats[0].completion_time, 12);
        assert_eq!(result.stats[0].waiting_time, 4);
        assert_eq!(result.stats[1].completion_time, 5);
        assert_eq!(result.stats[1].waiting_time, 0);
    }

    #[test]
    fn test_non_preemptive_runs_to_completion() {
        let batch = vec![Process::new(1, 0, 8), Process::new(2, 1, 4)];
        let result = sjf(&batch, false).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 0, 8), Segment::new(2, 8, 12)]
        );
        assert_eq!(result.stats[0].completion_time, 8);
        assert_eq!(result.stats[1].completion_time, 12);
        assert_eq!(result.stats[1].waiting_time, 7);
    }

    #[test]
    fn test_non_preemptive_picks_shortest_among_arrived() {
        let batch = vec![
            Process::new(1, 0, 6),
            Process::new(2, 1, 4),
            Process::new(3, 2, 2),
        ];
        let result = sjf(&batch, false).unwrap();

        // After process 1 finishes at 6, both 2 and 3 have arrived; the
        // shorter process 3 goes first.
        assert_eq!(
            result.schedule.segments(),
            &[
                Segment::new(1, 0, 6),
                Segment::new(3, 6, 8),
                Segment::new(2, 8, 12),
            ]
        );
    }

    #[test]
    fn test_remaining_tie_keeps_input_order() {
        let batch = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let result = sjf(&batch, true).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 0, 3), Segment::new(2, 3, 6)]
        );
    }

    #[test]
    fn test_no_preemption_on_equal_remaining() {
        // At tick 2 process 2 arrives with burst 3 while process 1 also
        // has remaining 3: no strictly-smaller candidate, no switch.
        let batch = vec![Process::new(1, 0, 5), Process::new(2, 2, 3)];
        let result = sjf(&batch, true).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 0, 5), Segment::new(2, 5, 8)]
        );
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let batch = vec![Process::new(1, 4, 2)];
        let result = sjf(&batch, true).unwrap();

        assert_eq!(result.schedule.segments(), &[Segment::new(1, 4, 6)]);
        assert_eq!(result.stats[0].waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_between_arrivals() {
        let batch = vec![Process::new(1, 0, 2), Process::new(2, 7, 1)];
        let result = sjf(&batch, false).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 0, 2), Segment::new(2, 7, 8)]
        );
    }

    #[test]
    fn test_rejects_invalid_batch() {
        let bad = vec![Process::new(1, 0, 2), Process::new(1, 1, 2)];
        assert!(matches!(sjf(&bad, true), Err(Error::InvalidBatch(_))));
    }
}
