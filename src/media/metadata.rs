use crate::foundation::core::MediaSize;

/// Descriptive metadata for the selected video.
///
/// Field names follow the upload contract. Zero dimensions or duration mean "not known yet";
/// accessors turn those into `None`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaMetadata {
    /// Server-side (or local) file name.
    pub filename: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Frame width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Frame height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Frames per second.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Where the file can be fetched from; empty for local-only selections.
    #[serde(default)]
    pub url: String,
}

fn default_fps() -> f64 {
    30.0
}

/// Values reported by the host decoder once the first frame is available.
///
/// `None` keeps whatever was known before.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DecodedMetadata {
    /// Decoded duration in seconds.
    pub duration: Option<f64>,
    /// Decoded frame width.
    pub width: Option<u32>,
    /// Decoded frame height.
    pub height: Option<u32>,
    /// Decoded frame rate.
    pub fps: Option<f64>,
}

impl MediaMetadata {
    /// Metadata for a freshly selected local file: nothing decoded yet.
    pub fn local(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            duration: 0.0,
            width: 0,
            height: 0,
            fps: default_fps(),
            url: String::new(),
        }
    }

    /// Overlay decoder-reported values on top of what is already known.
    pub fn refine(&mut self, decoded: DecodedMetadata) {
        if let Some(d) = decoded.duration.filter(|d| d.is_finite() && *d >= 0.0) {
            self.duration = d;
        }
        if let Some(w) = decoded.width {
            self.width = w;
        }
        if let Some(h) = decoded.height {
            self.height = h;
        }
        if let Some(fps) = decoded.fps.filter(|f| f.is_finite() && *f > 0.0) {
            self.fps = fps;
        }
    }

    /// Frame size, once both dimensions are known.
    pub fn media_size(&self) -> Option<MediaSize> {
        MediaSize::new(self.width, self.height).ok()
    }

    /// `width / height`, once known.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.media_size().and_then(MediaSize::aspect_ratio)
    }

    /// Duration in seconds, once known and positive.
    pub fn duration_sec(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/metadata.rs"]
mod tests;
