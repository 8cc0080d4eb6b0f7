use crate::foundation::error::{VidmarkError, VidmarkResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Pixel dimensions of the decoded media frame (media space).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl MediaSize {
    /// Create a media size; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> VidmarkResult<Self> {
        if width == 0 || height == 0 {
            return Err(VidmarkError::validation("MediaSize dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// `width / height`, or `None` for a degenerate size.
    pub fn aspect_ratio(self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }

    /// Width as `f64`.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Clamp a media-space point into `[0, width] x [0, height]`.
    pub fn clamp_point(self, p: Point) -> Point {
        Point::new(
            clamp_finite(p.x, 0.0, self.width_f64()),
            clamp_finite(p.y, 0.0, self.height_f64()),
        )
    }
}

/// Closed time window `[start, start + duration]` in seconds.
///
/// Field names follow the render contract (`time_sec`, `duration_sec`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeWindow {
    /// Window start in seconds.
    #[serde(rename = "time_sec")]
    pub start_sec: f64,
    /// Window length in seconds, `> 0`.
    #[serde(rename = "duration_sec")]
    pub duration_sec: f64,
}

impl TimeWindow {
    /// Create a validated window (`start >= 0`, `duration > 0`, both finite).
    pub fn new(start_sec: f64, duration_sec: f64) -> VidmarkResult<Self> {
        if !start_sec.is_finite() || start_sec < 0.0 {
            return Err(VidmarkError::validation(
                "TimeWindow start must be finite and >= 0",
            ));
        }
        if !duration_sec.is_finite() || duration_sec <= 0.0 {
            return Err(VidmarkError::validation(
                "TimeWindow duration must be finite and > 0",
            ));
        }
        Ok(Self {
            start_sec,
            duration_sec,
        })
    }

    /// Window end (`start + duration`). May lie past the end of the media.
    pub fn end_sec(self) -> f64 {
        self.start_sec + self.duration_sec
    }

    /// Return `true` when `t` lies inside the closed interval, both boundaries included.
    pub fn contains(self, t: f64) -> bool {
        t >= self.start_sec && t <= self.end_sec()
    }
}

/// `v.clamp(lo, hi)` that maps NaN to `lo` instead of propagating it.
pub(crate) fn clamp_finite(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
