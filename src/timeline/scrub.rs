use crate::{foundation::core::Rect, timeline::projector::seek_from_pointer};

/// Press-drag-release scrubbing over a timeline track.
///
/// While pressed, every pointer move yields a seek time, even when the pointer has left the
/// track; positions outside the track clamp to its ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrubGesture {
    active: Option<Active>,
}

#[derive(Clone, Copy, Debug)]
struct Active {
    track: Rect,
    total_sec: f64,
}

impl ScrubGesture {
    /// Idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin scrubbing at `pointer_x` and return the seek time.
    ///
    /// Track bounds and duration are captured for the whole gesture.
    pub fn press(&mut self, pointer_x: f64, track: Rect, total_sec: f64) -> f64 {
        self.active = Some(Active { track, total_sec });
        seek_from_pointer(pointer_x, track, total_sec)
    }

    /// Seek time for a move while pressed; `None` when idle.
    pub fn drag_to(&self, pointer_x: f64) -> Option<f64> {
        let a = self.active?;
        Some(seek_from_pointer(pointer_x, a.track, a.total_sec))
    }

    /// End the gesture. Returns `true` if one was in progress.
    pub fn release(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Return `true` while the pointer is held down.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scrub.rs"]
mod tests;
