//! Per-frame overlay geometry for burning annotations into video.
//!
//! [`plan_frame`] resolves which annotations are active at a frame time and where each marker and
//! label lands in media pixel space. The result is backend-agnostic: a renderer only has to
//! stroke/fill the shapes and draw the text at the given origins.
//!
//! Layout rules:
//! - markers are pinned inside the frame;
//! - labels float `marker_size + 10` px right of the marker, kept 10 px from the edges;
//! - callouts are a 240x60 box at `(x + 40, y - 40)`, kept 20 px from the edges, with a leader
//!   line back to the marker;
//! - headlines stack upwards from `height - 60` by 50 px per active rank.

use crate::{
    foundation::core::{MediaSize, Point, Rect, Size, clamp_finite},
    model::annotation::{Annotation, AnnotationId, LabelStyle, MarkerKind},
    model::color::Rgba8,
    visibility::filter::{LabelContext, active_at, label_visible},
};
use kurbo::{Circle, Line};

/// Longest label text drawn before shortening, in characters.
pub const MAX_LABEL_CHARS: usize = 60;

const ELLIPSIS: &str = "...";
const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

const LABEL_GAP: f64 = 10.0;
const LABEL_MARGIN: f64 = 10.0;
const LABEL_PAD: f64 = 5.0;
const CALLOUT_SIZE: Size = Size::new(240.0, 60.0);
const CALLOUT_OFFSET: (f64, f64) = (40.0, -40.0);
const CALLOUT_MARGIN: f64 = 20.0;
const HEADLINE_BOTTOM: f64 = 60.0;
const HEADLINE_STRIDE: f64 = 50.0;
const HEADLINE_LEFT: f64 = 20.0;

/// Text extent provider for label boxes.
pub trait TextMeasure {
    /// Width and cap height of `text` set at `px` pixels.
    fn measure(&self, text: &str, px: f64) -> Size;
}

/// Fixed-advance estimate: every character is `advance * px` wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    /// Advance per character as a fraction of the pixel size.
    pub advance: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure(&self, text: &str, px: f64) -> Size {
        Size::new(text.chars().count() as f64 * self.advance * px, px)
    }
}

/// Marker shape in media pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerGeometry {
    /// Stroked ring with a filled white center.
    Ring {
        /// Outer ring (stroked).
        ring: Circle,
        /// Center dot (filled white).
        center: Circle,
    },
    /// Arrow from the upper left onto the position.
    Arrow {
        /// Shaft; `p1` is the tip.
        shaft: Line,
        /// Filled dot at the tip.
        tip: Circle,
    },
    /// Diamond outline with a filled white center.
    Diamond {
        /// Square bounding the diamond's four vertices.
        bounds: Rect,
        /// Center dot (filled white).
        center: Circle,
    },
}

/// A marker ready to draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MarkerDraw {
    /// Shape.
    pub geometry: MarkerGeometry,
    /// Stroke/fill color.
    pub color: Rgba8,
    /// Fill of the `center` dot for rings and diamonds; arrows have none.
    pub center_fill: Option<Rgba8>,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

/// A label ready to draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LabelDraw {
    /// Presentation that produced this layout.
    pub style: LabelStyle,
    /// Display text (fallback applied, shortened).
    pub text: String,
    /// Baseline origin of the text.
    pub text_origin: Point,
    /// Text color.
    pub text_color: Rgba8,
    /// Text size in pixels.
    pub text_px: f64,
    /// Translucent backdrop.
    pub background: Rect,
    /// Backdrop color, chosen against the text luminance.
    pub background_color: Rgba8,
    /// Backdrop opacity in `[0, 1]`.
    pub background_alpha: f64,
    /// Solid accent bar in the marker color (headlines).
    pub accent: Option<Rect>,
    /// Leader line from the box to the marker (callouts).
    pub leader: Option<Line>,
    /// Whether the backdrop gets a marker-colored border (callouts).
    pub border: bool,
}

/// Everything drawn for one active annotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnnotationDraw {
    /// Source annotation.
    pub id: AnnotationId,
    /// Position in the active list at this time.
    pub rank: usize,
    /// Marker.
    pub marker: MarkerDraw,
    /// Label; `None` when the preview gate hides it.
    pub label: Option<LabelDraw>,
}

/// Draw list for one frame, back to front.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayPlan {
    /// Frame size the geometry was laid out for.
    pub frame: MediaSize,
    /// Frame time in seconds.
    pub time_sec: f64,
    /// Active annotations in creation order.
    pub items: Vec<AnnotationDraw>,
}

/// Plan a rendered frame: every active annotation with its label.
#[tracing::instrument(skip(annotations, measure))]
pub fn plan_frame<'a, I>(
    annotations: I,
    frame: MediaSize,
    time_sec: f64,
    measure: &dyn TextMeasure,
) -> OverlayPlan
where
    I: IntoIterator<Item = &'a Annotation>,
{
    plan_with(annotations, frame, time_sec, measure, None)
}

/// Plan an editor preview frame: labels follow the hover/drag/always-visible gate.
pub fn plan_preview<'a, I>(
    annotations: I,
    frame: MediaSize,
    time_sec: f64,
    measure: &dyn TextMeasure,
    labels: LabelContext,
) -> OverlayPlan
where
    I: IntoIterator<Item = &'a Annotation>,
{
    plan_with(annotations, frame, time_sec, measure, Some(labels))
}

fn plan_with<'a, I>(
    annotations: I,
    frame: MediaSize,
    time_sec: f64,
    measure: &dyn TextMeasure,
    gate: Option<LabelContext>,
) -> OverlayPlan
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let items = active_at(time_sec, annotations)
        .into_iter()
        .enumerate()
        .map(|(rank, ann)| {
            let anchor = pin_to_frame(ann.position, frame);
            let show = gate.is_none_or(|ctx| label_visible(ann, ctx));
            AnnotationDraw {
                id: ann.id,
                rank,
                marker: marker_for(ann, anchor),
                label: show.then(|| label_for(ann, anchor, rank, frame, measure)),
            }
        })
        .collect();

    OverlayPlan {
        frame,
        time_sec,
        items,
    }
}

fn pin_to_frame(p: Point, frame: MediaSize) -> Point {
    Point::new(
        clamp_finite(p.x, 0.0, (frame.width_f64() - 1.0).max(0.0)),
        clamp_finite(p.y, 0.0, (frame.height_f64() - 1.0).max(0.0)),
    )
}

/// `max(lo, min(hi, v))`: when the box does not fit, the low edge wins.
fn fit(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

fn marker_for(ann: &Annotation, at: Point) -> MarkerDraw {
    let size = f64::from(ann.visuals.marker_size);
    let color = ann.visuals.color.rgba8();
    match ann.marker_kind {
        MarkerKind::Arrow => {
            let from = Point::new((at.x - size * 3.0).max(0.0), (at.y - size * 2.0).max(0.0));
            MarkerDraw {
                geometry: MarkerGeometry::Arrow {
                    shaft: Line::new(from, at),
                    tip: Circle::new(at, 5.0),
                },
                color,
                center_fill: None,
                stroke_width: 3.0,
            }
        }
        MarkerKind::Pin => MarkerDraw {
            geometry: MarkerGeometry::Diamond {
                bounds: Rect::from_center_size(at, Size::new(size * 2.0, size * 2.0)),
                center: Circle::new(at, 4.0),
            },
            color,
            center_fill: Some(WHITE),
            stroke_width: 2.0,
        },
        MarkerKind::Dot => MarkerDraw {
            geometry: MarkerGeometry::Ring {
                ring: Circle::new(at, size),
                center: Circle::new(at, (size * 0.3).floor().max(4.0)),
            },
            color,
            center_fill: Some(WHITE),
            stroke_width: 2.0,
        },
    }
}

fn label_for(
    ann: &Annotation,
    at: Point,
    rank: usize,
    frame: MediaSize,
    measure: &dyn TextMeasure,
) -> LabelDraw {
    let (w, h) = (frame.width_f64(), frame.height_f64());
    let text = display_text(ann);
    let text_color = ann.visuals.text_color.rgba8();
    let dark_text = text_color.is_dark();
    let text_px = f64::from(ann.visuals.text_size);

    match ann.label_style {
        LabelStyle::Headline => {
            let y_base = h - HEADLINE_BOTTOM - rank as f64 * HEADLINE_STRIDE;
            LabelDraw {
                style: LabelStyle::Headline,
                text,
                text_origin: Point::new(HEADLINE_LEFT + 14.0, y_base),
                text_color,
                text_px,
                background: Rect::new(
                    HEADLINE_LEFT,
                    y_base - 30.0,
                    (w / 2.0).floor(),
                    y_base + 10.0,
                ),
                background_color: backdrop(dark_text, 245, 10),
                background_alpha: 0.7,
                accent: Some(Rect::new(
                    HEADLINE_LEFT,
                    y_base - 30.0,
                    HEADLINE_LEFT + 4.0,
                    y_base + 10.0,
                )),
                leader: None,
                border: false,
            }
        }
        LabelStyle::Callout => {
            let bx = fit(
                at.x + CALLOUT_OFFSET.0,
                CALLOUT_MARGIN,
                w - CALLOUT_SIZE.width - CALLOUT_MARGIN,
            );
            let by = fit(
                at.y + CALLOUT_OFFSET.1,
                CALLOUT_MARGIN,
                h - CALLOUT_SIZE.height - CALLOUT_MARGIN,
            );
            let background = Rect::from_origin_size((bx, by), CALLOUT_SIZE);
            LabelDraw {
                style: LabelStyle::Callout,
                text,
                text_origin: Point::new(bx + 10.0, by + 35.0),
                text_color,
                text_px,
                background,
                background_color: backdrop(dark_text, 240, 20),
                background_alpha: 0.8,
                accent: None,
                leader: Some(Line::new((bx, by + CALLOUT_SIZE.height / 2.0), at)),
                border: true,
            }
        }
        LabelStyle::Label => {
            let ext = measure.measure(&text, text_px);
            let size = f64::from(ann.visuals.marker_size);
            let tx = fit(
                at.x + size + LABEL_GAP,
                LABEL_MARGIN,
                w - ext.width - LABEL_MARGIN,
            );
            let ty = fit(at.y, ext.height + LABEL_MARGIN, h - LABEL_MARGIN);
            LabelDraw {
                style: LabelStyle::Label,
                text,
                text_origin: Point::new(tx, ty),
                text_color,
                text_px,
                background: Rect::new(
                    tx - LABEL_PAD,
                    ty - ext.height - LABEL_PAD,
                    tx + ext.width + LABEL_PAD,
                    ty + LABEL_PAD,
                ),
                background_color: backdrop(dark_text, 245, 10),
                background_alpha: 0.7,
                accent: None,
                leader: None,
                border: false,
            }
        }
    }
}

fn backdrop(dark_text: bool, light: u8, dark: u8) -> Rgba8 {
    if dark_text {
        Rgba8::rgb(light, light, light)
    } else {
        Rgba8::rgb(dark, dark, dark)
    }
}

/// Text drawn for `ann`: `#<id>` when blank, then shortened to [`MAX_LABEL_CHARS`].
pub fn display_text(ann: &Annotation) -> String {
    let trimmed = ann.text.trim();
    if trimmed.is_empty() {
        return format!("#{}", ann.id);
    }
    shorten(trimmed, MAX_LABEL_CHARS)
}

/// Collapse whitespace runs and, if still longer than `width` characters, keep whole leading
/// words followed by `...` so the result fits in `width`.
pub fn shorten(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut out = String::new();
    let mut used = 0usize;
    for word in &words {
        let n = word.chars().count();
        let sep = usize::from(!out.is_empty());
        if used + sep + n > budget {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        used += sep + n;
    }
    // A first word longer than the budget leaves only the placeholder.
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/plan/frame_plan.rs"]
mod tests;
