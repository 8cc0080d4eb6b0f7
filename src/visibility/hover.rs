use std::time::Duration;

/// Single-slot, restartable hide timer for hover-gated labels.
///
/// Timestamps are host-supplied monotonic offsets (e.g. time since session start). At most one
/// deadline is pending; every [`HoverTimer::touch`] replaces it.
#[derive(Clone, Copy, Debug)]
pub struct HoverTimer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl HoverTimer {
    /// Timer that hides `delay` after the last interaction.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an interaction at `now`: cancel any pending hide and schedule a fresh one.
    pub fn touch(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    /// Hide immediately (pointer left the surface).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the surface counts as hovered at `now`.
    pub fn is_hovering(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|d| now < d)
    }

    /// Fire the pending hide if its deadline has passed. Returns `true` exactly once per
    /// scheduled hide.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
