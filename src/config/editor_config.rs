use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::{
    foundation::error::{VidmarkError, VidmarkResult},
    model::annotation::{LabelStyle, MarkerKind, Visuals},
};

/// Allowed marker sizes in pixels.
pub const MARKER_SIZE_RANGE: std::ops::RangeInclusive<u32> = 8..=120;
/// Allowed default display durations in seconds.
pub const DURATION_RANGE_SEC: std::ops::RangeInclusive<f64> = 0.5..=15.0;

/// Values stamped onto every newly placed annotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AuthoringDefaults {
    /// Label text; empty means "use the `Task N` placeholder".
    pub text: String,
    /// Marker glyph.
    pub marker_kind: MarkerKind,
    /// Label presentation.
    pub label_style: LabelStyle,
    /// Colors, sizes and font.
    pub visuals: Visuals,
    /// Display duration in seconds.
    pub duration_sec: f64,
    /// Label always visible while active.
    pub always_visible: bool,
}

impl Default for AuthoringDefaults {
    fn default() -> Self {
        Self {
            text: String::new(),
            marker_kind: MarkerKind::Dot,
            label_style: LabelStyle::Label,
            visuals: Visuals::default(),
            duration_sec: 3.0,
            always_visible: true,
        }
    }
}

impl AuthoringDefaults {
    /// Check sizes and duration against the authoring ranges.
    pub fn validate(&self) -> VidmarkResult<()> {
        if !MARKER_SIZE_RANGE.contains(&self.visuals.marker_size) {
            return Err(VidmarkError::validation(format!(
                "marker_size {} outside {}..={}",
                self.visuals.marker_size,
                MARKER_SIZE_RANGE.start(),
                MARKER_SIZE_RANGE.end()
            )));
        }
        if self.visuals.text_size == 0 {
            return Err(VidmarkError::validation("text_size must be > 0"));
        }
        if !DURATION_RANGE_SEC.contains(&self.duration_sec) {
            return Err(VidmarkError::validation(format!(
                "duration_sec {} outside {}..={}",
                self.duration_sec,
                DURATION_RANGE_SEC.start(),
                DURATION_RANGE_SEC.end()
            )));
        }
        Ok(())
    }
}

/// Editor-wide tunables.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Defaults for new annotations.
    pub defaults: AuthoringDefaults,
    /// Labels that are not always-visible hide this long after the last interaction.
    pub hover_hide_delay_ms: u64,
    /// The media engine is repositioned only when it drifts further than this from the clock.
    pub seek_tolerance_sec: f64,
    /// Timeline duration used before the media reports one.
    pub fallback_duration_sec: f64,
    /// Number of ruler ticks across the timeline.
    pub ruler_ticks: u32,
    /// Every n-th ruler tick carries a time label.
    pub ruler_label_every: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            defaults: AuthoringDefaults::default(),
            hover_hide_delay_ms: 3_000,
            seek_tolerance_sec: 0.1,
            fallback_duration_sec: 100.0,
            ruler_ticks: 40,
            ruler_label_every: 4,
        }
    }
}

impl EditorConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> VidmarkResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| VidmarkError::serde(format!("parse editor config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VidmarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VidmarkError::validation(format!("open editor config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate all fields.
    pub fn validate(&self) -> VidmarkResult<()> {
        self.defaults.validate()?;
        if !self.seek_tolerance_sec.is_finite() || self.seek_tolerance_sec < 0.0 {
            return Err(VidmarkError::validation(
                "seek_tolerance_sec must be finite and >= 0",
            ));
        }
        if !self.fallback_duration_sec.is_finite() || self.fallback_duration_sec <= 0.0 {
            return Err(VidmarkError::validation(
                "fallback_duration_sec must be finite and > 0",
            ));
        }
        if self.ruler_ticks == 0 || self.ruler_label_every == 0 {
            return Err(VidmarkError::validation(
                "ruler_ticks and ruler_label_every must be > 0",
            ));
        }
        Ok(())
    }

    /// Hover hide delay as a [`Duration`].
    pub fn hover_hide_delay(&self) -> Duration {
        Duration::from_millis(self.hover_hide_delay_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/editor_config.rs"]
mod tests;
