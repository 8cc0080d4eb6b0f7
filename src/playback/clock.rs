use crate::foundation::error::{VidmarkError, VidmarkResult};

/// Host media element driven by the clock.
///
/// The engine owns decoding and the real playback position; the clock mirrors it and decides
/// when the engine has to be told anything.
pub trait MediaEngine {
    /// Start playback. Hosts may refuse (autoplay policy, decode failure).
    fn play(&mut self) -> VidmarkResult<()>;
    /// Stop playback. Never fails.
    fn pause(&mut self);
    /// Current engine position in seconds.
    fn position_sec(&self) -> f64;
    /// Reposition the engine.
    fn set_position_sec(&mut self, t: f64);
}

/// Whether the clock is advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayState {
    /// Stopped at `current_time_sec`.
    #[default]
    Paused,
    /// Advancing via engine time updates.
    Playing,
}

/// Result of a play request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The clock is now playing.
    Playing,
    /// The engine refused; the clock stayed paused.
    Refused(String),
}

/// Play/pause state and current time, mirrored against a [`MediaEngine`].
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    state: PlayState,
    current_time_sec: f64,
    seek_tolerance_sec: f64,
}

impl PlaybackClock {
    /// Paused clock at zero. Seeks within `seek_tolerance_sec` of the engine position are not
    /// forwarded to the engine.
    pub fn new(seek_tolerance_sec: f64) -> Self {
        Self {
            state: PlayState::Paused,
            current_time_sec: 0.0,
            seek_tolerance_sec: seek_tolerance_sec.max(0.0),
        }
    }

    /// Current state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Return `true` while playing.
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Current playback time in seconds.
    pub fn current_time_sec(&self) -> f64 {
        self.current_time_sec
    }

    /// Start playback. An engine refusal leaves the clock paused and is reported, not raised.
    pub fn play(&mut self, engine: &mut dyn MediaEngine) -> PlayOutcome {
        if self.state == PlayState::Playing {
            return PlayOutcome::Playing;
        }
        match engine.play() {
            Ok(()) => {
                self.state = PlayState::Playing;
                PlayOutcome::Playing
            }
            Err(err) => {
                tracing::warn!(error = %err, "play refused, staying paused");
                engine.pause();
                self.state = PlayState::Paused;
                let reason = match err {
                    VidmarkError::Playback(msg) => msg,
                    other => other.to_string(),
                };
                PlayOutcome::Refused(reason)
            }
        }
    }

    /// Stop playback.
    pub fn pause(&mut self, engine: &mut dyn MediaEngine) {
        engine.pause();
        self.state = PlayState::Paused;
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self, engine: &mut dyn MediaEngine) -> Option<PlayOutcome> {
        match self.state {
            PlayState::Playing => {
                self.pause(engine);
                None
            }
            PlayState::Paused => Some(self.play(engine)),
        }
    }

    /// Jump to `t` (floored at zero). The engine is only repositioned when it has drifted more
    /// than the tolerance from the target. Returns `true` if the engine was repositioned.
    pub fn seek(&mut self, t: f64, engine: &mut dyn MediaEngine) -> bool {
        let t = if t.is_finite() { t.max(0.0) } else { 0.0 };
        self.current_time_sec = t;
        if (engine.position_sec() - t).abs() > self.seek_tolerance_sec {
            engine.set_position_sec(t);
            true
        } else {
            false
        }
    }

    /// Engine-originated time update; never seeks the engine back.
    pub fn on_time_update(&mut self, t: f64) {
        if t.is_finite() {
            self.current_time_sec = t.max(0.0);
        }
    }

    /// Back to paused at zero (new media selected).
    pub fn reset(&mut self) {
        self.state = PlayState::Paused;
        self.current_time_sec = 0.0;
    }
}

/// Engine stand-in that records what it was told; useful in tests and offline tooling.
#[derive(Clone, Debug, Default)]
pub struct InMemoryEngine {
    /// Reported position.
    pub position_sec: f64,
    /// Whether `play` succeeded last.
    pub playing: bool,
    /// When set, `play` fails with this reason.
    pub refuse_with: Option<String>,
    /// Number of repositioning calls received.
    pub seeks: usize,
}

impl InMemoryEngine {
    /// Engine that accepts every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose `play` always fails with `reason`.
    pub fn refusing(reason: impl Into<String>) -> Self {
        Self {
            refuse_with: Some(reason.into()),
            ..Self::default()
        }
    }
}

impl MediaEngine for InMemoryEngine {
    fn play(&mut self) -> VidmarkResult<()> {
        if let Some(reason) = &self.refuse_with {
            return Err(VidmarkError::playback(reason.clone()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position_sec(&self) -> f64 {
        self.position_sec
    }

    fn set_position_sec(&mut self, t: f64) {
        self.position_sec = t;
        self.seeks += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
