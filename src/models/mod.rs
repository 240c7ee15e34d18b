//! Simulation domain models.
//!
//! Input types ([`Process`], [`Batch`]) are caller-owned and immutable
//! during a run; output types ([`Segment`], [`Timeline`], [`ProcessStats`],
//! [`SchedulingResult`]) are produced fresh by each run and never mutated
//! afterwards. All serialize with camelCase field names, the wire shape a
//! timeline renderer consumes.

mod process;
mod stats;
mod timeline;

pub use process::{Batch, Process, Tick};
pub use stats::{ProcessStats, SchedulingResult};
pub use timeline::{Segment, Timeline};
