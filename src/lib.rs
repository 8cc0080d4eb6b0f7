//! vidmark is the state and geometry core of an interactive video annotation editor.
//!
//! Users drop markers with text labels onto a playing video; each annotation is anchored to a
//! point in the video's own pixel space and to a time window. vidmark owns everything between
//! raw pointer/engine events and what gets drawn:
//!
//! 1. **Map**: container pointer -> media pixel space through the contain-fit overlay rect
//!    ([`compute_overlay_rect`], [`to_media_space`]).
//! 2. **Store**: ordered, id-keyed annotations ([`AnnotationStore`]).
//! 3. **Filter**: which annotations are active at a playback time ([`active_at`]) and whether
//!    their labels show ([`label_visible`]).
//! 4. **Project**: time windows onto a timeline track, and pointer scrubbing back into time
//!    ([`layout`], [`seek_from_pointer`], [`ScrubGesture`]).
//! 5. **Plan**: per-frame marker and label geometry for a renderer ([`plan_frame`]).
//!
//! [`EditorSession`] ties these together behind `&mut self` event handlers. Decoding, upload and
//! rendering stay with the host behind the [`MediaEngine`], [`UploadService`] and
//! [`RenderService`] traits.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: all editor state lives in the session value.
//! - **Deterministic**: filtering, projection and planning are pure functions of their inputs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod geometry;
mod media;
mod model;
mod plan;
mod playback;
mod service;
mod session;
mod store;
mod timeline;
mod visibility;

pub use config::editor_config::{
    AuthoringDefaults, DURATION_RANGE_SEC, EditorConfig, MARKER_SIZE_RANGE,
};
pub use foundation::core::{MediaSize, Point, Rect, Size, TimeWindow, Vec2};
pub use foundation::error::{VidmarkError, VidmarkResult};
pub use geometry::overlay::{
    MapMode, OverlayRect, compute_overlay_rect, to_container_space, to_media_space,
};
pub use media::metadata::{DecodedMetadata, MediaMetadata};
pub use media::preview::PreviewHandle;
pub use model::annotation::{
    Annotation, AnnotationEdit, AnnotationId, LabelStyle, MarkerKind, Visuals,
};
pub use model::color::{HexColor, Rgba8};
pub use plan::frame_plan::{
    AnnotationDraw, ApproxTextMeasure, LabelDraw, MAX_LABEL_CHARS, MarkerDraw, MarkerGeometry,
    OverlayPlan, TextMeasure, display_text, plan_frame, plan_preview, shorten,
};
pub use plan::text_measure::FontTextMeasure;
pub use playback::clock::{InMemoryEngine, MediaEngine, PlayOutcome, PlayState, PlaybackClock};
pub use service::contract::{
    RenderRequest, RenderResponse, RenderService, UploadResponse, UploadService,
};
pub use session::editor_session::{ClickOutcome, EditorSession};
pub use store::annotation_store::{AnnotationStore, IdAllocator};
pub use timeline::projector::{
    ClipLayout, RulerTick, layout, playhead_pct, ruler, seek_from_pointer,
};
pub use timeline::scrub::ScrubGesture;
pub use visibility::filter::{LabelContext, active_at, label_visible};
pub use visibility::hover::HoverTimer;
