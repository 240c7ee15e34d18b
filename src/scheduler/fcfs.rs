//! First-Come-First-Serve.
//!
//! Processes run in arrival order, each as one contiguous segment. Ties on
//! arrival keep input order (stable sort). When the clock is behind the
//! next arrival the gap is skipped without emitting a segment.
//!
//! Complexity: O(N log N) for the sort, O(N) for the walk.

use log::debug;

use super::{check_batch, sim::Recorder, Error};
use crate::models::{Process, SchedulingResult, Tick};

/// Runs the batch under FCFS.
pub fn fcfs(batch: &[Process]) -> Result<SchedulingResult, Error> {
    check_batch(batch)?;
    debug!("fcfs: simulating {} processes", batch.len());

    let mut order: Vec<usize> = (0..batch.len()).collect();
    order.sort_by_key(|&i| batch[i].arrival_time);

    let mut recorder = Recorder::new();
    let mut clock: Tick = 0;

    for &index in &order {
        let process = &batch[index];
        if clock < process.arrival_time {
            clock = process.arrival_time;
        }

        recorder.record_segment(process.id, clock, clock + process.burst_time);
        clock += process.burst_time;
        recorder.record_completion(index, process, clock);
    }

    Ok(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_two_process_determinism() {
        let batch = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        let result = fcfs(&batch).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 0, 5), Segment::new(2, 5, 8)]
        );
        assert_eq!(result.stats[0].waiting_time, 0);
        assert_eq!(result.stats[0].turnaround_time, 5);
        assert_eq!(result.stats[1].waiting_time, 4);
        assert_eq!(result.stats[1].turnaround_time, 7);
    }

    #[test]
    fn test_idle_gap_not_recorded() {
        // Nothing arrives until tick 3
        let batch = vec![Process::new(1, 3, 2), Process::new(2, 10, 1)];
        let result = fcfs(&batch).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(1, 3, 5), Segment::new(2, 10, 11)]
        );
        assert_eq!(result.stats[0].waiting_time, 0);
        assert_eq!(result.stats[1].waiting_time, 0);
    }

    #[test]
    fn test_arrival_tie_keeps_input_order() {
        let batch = vec![
            Process::new(1, 2, 1),
            Process::new(2, 2, 1),
            Process::new(3, 2, 1),
        ];
        let result = fcfs(&batch).unwrap();
        let ids: Vec<u32> = result
            .schedule
            .segments()
            .iter()
            .map(|s| s.process_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_later_input_position_may_run_first() {
        let batch = vec![Process::new(1, 6, 2), Process::new(2, 0, 2)];
        let result = fcfs(&batch).unwrap();

        assert_eq!(
            result.schedule.segments(),
            &[Segment::new(2, 0, 2), Segment::new(1, 6, 8)]
        );
        // Stats still in input order
        assert_eq!(result.stats[0].process_id, 1);
        assert_eq!(result.stats[1].process_id, 2);
    }

    #[test]
    fn test_rejects_invalid_batch() {
        assert!(matches!(fcfs(&[]), Err(Error::InvalidBatch(_))));
        let bad = vec![Process::new(1, 0, 0)];
        assert!(matches!(fcfs(&bad), Err(Error::InvalidBatch(_))));
    }
}
