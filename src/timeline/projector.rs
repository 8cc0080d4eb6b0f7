//! 1-D projection of annotation windows onto a horizontal timeline track.

use crate::{
    foundation::core::{Rect, clamp_finite},
    model::annotation::Annotation,
};

/// Horizontal placement of an annotation clip, in percent of the track width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipLayout {
    /// Left edge, `100 * start / total`.
    pub left_pct: f64,
    /// Width, `100 * duration / total`.
    pub width_pct: f64,
}

/// One ruler tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RulerTick {
    /// Tick position in percent of the track width.
    pub pct: f64,
    /// Time at the tick, in seconds.
    pub time_sec: f64,
    /// Text label (whole seconds) for every n-th tick.
    pub label: Option<String>,
}

fn usable_duration(total_sec: f64) -> Option<f64> {
    (total_sec.is_finite() && total_sec > 0.0).then_some(total_sec)
}

/// Clip placement for `ann` on a track spanning `total_sec`; `None` for a degenerate duration.
pub fn layout(ann: &Annotation, total_sec: f64) -> Option<ClipLayout> {
    let total = usable_duration(total_sec)?;
    Some(ClipLayout {
        left_pct: 100.0 * ann.time_window.start_sec / total,
        width_pct: 100.0 * ann.time_window.duration_sec / total,
    })
}

/// Playhead position in percent; `None` for a degenerate duration.
pub fn playhead_pct(time_sec: f64, total_sec: f64) -> Option<f64> {
    let total = usable_duration(total_sec)?;
    Some(100.0 * time_sec / total)
}

/// Seek time for a pointer at `pointer_x` over `track`, clamped to the track span.
///
/// Degenerate tracks or durations seek to zero.
pub fn seek_from_pointer(pointer_x: f64, track: Rect, total_sec: f64) -> f64 {
    let width = track.width();
    let Some(total) = usable_duration(total_sec) else {
        return 0.0;
    };
    if !(width.is_finite() && width > 0.0) {
        return 0.0;
    }
    let x = clamp_finite(pointer_x - track.x0, 0.0, width);
    x / width * total
}

/// Evenly spaced ruler ticks, labelling every `label_every`-th tick with whole seconds.
pub fn ruler(total_sec: f64, tick_count: u32, label_every: u32) -> Vec<RulerTick> {
    let Some(total) = usable_duration(total_sec) else {
        return Vec::new();
    };
    if tick_count == 0 {
        return Vec::new();
    }
    let step = total / f64::from(tick_count);
    (0..tick_count)
        .map(|i| {
            let time_sec = f64::from(i) * step;
            let label =
                (label_every > 0 && i % label_every == 0).then(|| format!("{time_sec:.0}s"));
            RulerTick {
                pct: 100.0 * f64::from(i) / f64::from(tick_count),
                time_sec,
                label,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/projector.rs"]
mod tests;
