use crate::{
    foundation::core::{MediaSize, Point, TimeWindow},
    foundation::error::{VidmarkError, VidmarkResult},
    model::color::HexColor,
};

/// Session-unique annotation identifier.
///
/// Allocated from a millisecond creation timestamp; see [`crate::AnnotationStore`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AnnotationId(pub u64);

impl std::fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker glyph drawn at the annotation position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Ring with a filled center.
    #[default]
    Dot,
    /// Arrow pointing at the position from the upper left.
    Arrow,
    /// Diamond pin.
    Pin,
}

/// How the annotation text is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Floating text bubble next to the marker.
    #[default]
    Label,
    /// Boxed text connected to the marker by a leader line.
    Callout,
    /// Lower-third title, stacked by active rank.
    Headline,
}

/// Visual fields of an annotation.
///
/// Missing fields deserialize to the authoring defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Visuals {
    /// Marker color.
    pub color: HexColor,
    /// Label text color.
    pub text_color: HexColor,
    /// Marker size in media pixels.
    pub marker_size: u32,
    /// Label text size in pixels.
    pub text_size: u32,
    /// CSS-style font weight (`"600"`, `"bold"`, ...).
    pub font_weight: String,
    /// CSS-style font style (`"normal"`, `"italic"`).
    pub font_style: String,
    /// Font family name.
    pub font_family: String,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            color: HexColor::from_parts("#3b82f6", [0x3b, 0x82, 0xf6, 0xff]),
            text_color: HexColor::from_parts("#ffffff", [0xff, 0xff, 0xff, 0xff]),
            marker_size: 16,
            text_size: 16,
            font_weight: "600".to_owned(),
            font_style: "normal".to_owned(),
            font_family: "Inter".to_owned(),
        }
    }
}

/// A time- and position-anchored annotation.
///
/// Serializes to the flat record shape the render service consumes:
/// `id, x, y, time_sec, duration_sec, text, marker_type, text_style, color, text_color,
/// marker_size, text_size, font_weight, font_style, font_family, label_always_visible`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Session-unique id.
    pub id: AnnotationId,
    /// Position in media pixel space.
    #[serde(flatten)]
    pub position: Point,
    /// When the annotation is shown.
    #[serde(flatten)]
    pub time_window: TimeWindow,
    /// Label text.
    pub text: String,
    /// Marker glyph.
    #[serde(rename = "marker_type")]
    pub marker_kind: MarkerKind,
    /// Label presentation.
    #[serde(rename = "text_style")]
    pub label_style: LabelStyle,
    /// Colors, sizes and font.
    #[serde(flatten)]
    pub visuals: Visuals,
    /// Show the label whenever the window is active, regardless of hover.
    #[serde(rename = "label_always_visible")]
    pub always_visible: bool,
}

impl Annotation {
    /// Check record invariants: valid window, positive marker size and, when `media` is known,
    /// a position inside the frame.
    pub fn validate(&self, media: Option<MediaSize>) -> VidmarkResult<()> {
        TimeWindow::new(self.time_window.start_sec, self.time_window.duration_sec)
            .map_err(|e| VidmarkError::validation(format!("annotation {}: {e}", self.id)))?;
        if self.visuals.marker_size == 0 {
            return Err(VidmarkError::validation(format!(
                "annotation {}: marker_size must be > 0",
                self.id
            )));
        }
        let Point { x, y } = self.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(VidmarkError::validation(format!(
                "annotation {}: position must be finite",
                self.id
            )));
        }
        if let Some(m) = media {
            if x < 0.0 || y < 0.0 || x > m.width_f64() || y > m.height_f64() {
                return Err(VidmarkError::validation(format!(
                    "annotation {}: position ({x}, {y}) outside {}x{} frame",
                    self.id, m.width, m.height
                )));
            }
        }
        Ok(())
    }
}

/// Field-level replacement of the editable parts of an annotation.
///
/// `None` leaves a field untouched. Position, id and window start are not editable here.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnnotationEdit {
    /// New label text.
    pub text: Option<String>,
    /// New marker glyph.
    pub marker_kind: Option<MarkerKind>,
    /// New label presentation.
    pub label_style: Option<LabelStyle>,
    /// New marker color.
    pub color: Option<HexColor>,
    /// New text color.
    pub text_color: Option<HexColor>,
    /// New marker size (`> 0`).
    pub marker_size: Option<u32>,
    /// New text size (`> 0`).
    pub text_size: Option<u32>,
    /// New font weight.
    pub font_weight: Option<String>,
    /// New font style.
    pub font_style: Option<String>,
    /// New font family.
    pub font_family: Option<String>,
    /// New always-visible flag.
    pub always_visible: Option<bool>,
    /// New window length (`> 0`); the start is kept.
    pub duration_sec: Option<f64>,
}

impl AnnotationEdit {
    /// Apply to `ann` atomically: either every field is replaced or, on a validation failure,
    /// none is.
    pub fn apply_to(&self, ann: &mut Annotation) -> VidmarkResult<()> {
        let window = match self.duration_sec {
            Some(d) => TimeWindow::new(ann.time_window.start_sec, d)?,
            None => ann.time_window,
        };
        if self.marker_size == Some(0) {
            return Err(VidmarkError::validation("marker_size must be > 0"));
        }
        if self.text_size == Some(0) {
            return Err(VidmarkError::validation("text_size must be > 0"));
        }

        ann.time_window = window;
        if let Some(v) = &self.text {
            ann.text = v.clone();
        }
        if let Some(v) = self.marker_kind {
            ann.marker_kind = v;
        }
        if let Some(v) = self.label_style {
            ann.label_style = v;
        }
        if let Some(v) = &self.color {
            ann.visuals.color = v.clone();
        }
        if let Some(v) = &self.text_color {
            ann.visuals.text_color = v.clone();
        }
        if let Some(v) = self.marker_size {
            ann.visuals.marker_size = v;
        }
        if let Some(v) = self.text_size {
            ann.visuals.text_size = v;
        }
        if let Some(v) = &self.font_weight {
            ann.visuals.font_weight = v.clone();
        }
        if let Some(v) = &self.font_style {
            ann.visuals.font_style = v.clone();
        }
        if let Some(v) = &self.font_family {
            ann.visuals.font_family = v.clone();
        }
        if let Some(v) = self.always_visible {
            ann.always_visible = v;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/annotation.rs"]
mod tests;
