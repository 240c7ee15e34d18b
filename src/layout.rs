//! Renderer contract: proportional spans and stable display colors.
//!
//! A timeline renderer needs two things from the core: segments
//! normalized against the final end time (for a proportional bar layout)
//! and a deterministic per-process color. Both are pure functions of the
//! result, so they live here rather than in any drawing code.

use serde::Serialize;

use crate::models::{Tick, Timeline};

/// One segment normalized against the timeline's total span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpan {
    /// Owning process.
    pub process_id: u32,
    /// Start position as a fraction of the whole, in `[0, 1)`.
    pub offset: f64,
    /// Extent as a fraction of the whole, in `(0, 1]`.
    pub width: f64,
    /// Ticks covered, for labels.
    pub duration: Tick,
}

/// A timeline reduced to proportional spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Spans in execution order.
    pub spans: Vec<LayoutSpan>,
    /// Denominator used for normalization (the timeline's makespan).
    pub total_time: Tick,
}

impl TimelineLayout {
    /// Normalizes a timeline. An empty timeline yields an empty layout.
    pub fn new(timeline: &Timeline) -> Self {
        let total_time = timeline.makespan();
        if total_time == 0 {
            return Self::default();
        }

        let total = total_time as f64;
        let spans = timeline
            .segments()
            .iter()
            .map(|s| LayoutSpan {
                process_id: s.process_id,
                offset: s.start_time as f64 / total,
                width: s.duration() as f64 / total,
                duration: s.duration(),
            })
            .collect();

        Self { spans, total_time }
    }
}

/// An HSL color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// CSS `hsl(...)` notation.
    pub fn css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Stable display color for a process.
///
/// Steps the hue wheel by the golden angle (137.5°) per id, so
/// consecutive ids stay visually distinct at any batch size.
pub fn segment_color(process_id: u32) -> Hsl {
    Hsl {
        hue: (f64::from(process_id) * 137.5) % 360.0,
        saturation: 70.0,
        lightness: 50.0,
    }
}
