use std::time::Duration;

use crate::{
    config::editor_config::{AuthoringDefaults, EditorConfig},
    foundation::core::{MediaSize, Point, Rect, Size},
    foundation::error::{VidmarkError, VidmarkResult},
    geometry::overlay::{
        MapMode, OverlayRect, compute_overlay_rect, to_container_space, to_media_space,
    },
    media::metadata::{DecodedMetadata, MediaMetadata},
    media::preview::PreviewHandle,
    model::annotation::{Annotation, AnnotationEdit, AnnotationId},
    plan::frame_plan::{OverlayPlan, TextMeasure, plan_preview},
    playback::clock::{MediaEngine, PlayOutcome, PlayState, PlaybackClock},
    service::contract::{RenderRequest, RenderResponse, RenderService, UploadService},
    store::annotation_store::AnnotationStore,
    timeline::projector::{ClipLayout, RulerTick, layout, playhead_pct, ruler},
    timeline::scrub::ScrubGesture,
    visibility::filter::{LabelContext, active_at},
    visibility::hover::HoverTimer,
};

/// What a click on the media surface did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new annotation was placed and playback paused.
    Placed(AnnotationId),
    /// The click landed on a letterbox/pillarbox bar.
    OutsideFrame,
    /// Frame geometry is not known yet (no media, or no container size).
    NotReady,
    /// A marker drag is in progress; the click ends it rather than placing.
    Dragging,
}

/// One editing session over a single selected video.
///
/// Owns every piece of editor state; hosts forward input and engine events to the `&mut self`
/// handlers and read derived views (active set, label gate, timeline layout) back out. Pointer
/// coordinates are relative to the media container's top-left corner. Timestamps passed as
/// [`Duration`] are monotonic offsets; `now_ms` values are wall-clock milliseconds used for ids.
#[derive(Debug)]
pub struct EditorSession<E: MediaEngine> {
    config: EditorConfig,
    engine: E,
    clock: PlaybackClock,
    store: AnnotationStore,
    media: Option<MediaMetadata>,
    preview: Option<PreviewHandle>,
    container: Option<Size>,
    overlay: Option<OverlayRect>,
    hover: HoverTimer,
    dragged: Option<AnnotationId>,
    scrub: ScrubGesture,
}

impl<E: MediaEngine> EditorSession<E> {
    /// New session with no media selected.
    pub fn new(config: EditorConfig, engine: E) -> VidmarkResult<Self> {
        config.validate()?;
        Ok(Self {
            clock: PlaybackClock::new(config.seek_tolerance_sec),
            hover: HoverTimer::new(config.hover_hide_delay()),
            config,
            engine,
            store: AnnotationStore::new(),
            media: None,
            preview: None,
            container: None,
            overlay: None,
            dragged: None,
            scrub: ScrubGesture::new(),
        })
    }

    /// Select a local file for preview before (or without) uploading it.
    ///
    /// Replaces any previous selection, releasing its preview resource. Annotations belong to the
    /// previous frame space and are cleared; playback resets to paused at zero.
    pub fn select_media(&mut self, filename: impl Into<String>, preview: Option<PreviewHandle>) {
        self.install_media(MediaMetadata::local(filename), preview);
    }

    /// Upload `bytes` and select the result. On failure nothing changes and `preview` is
    /// released.
    #[tracing::instrument(skip(self, service, bytes, preview), fields(len = bytes.len()))]
    pub fn upload(
        &mut self,
        service: &mut impl UploadService,
        filename: &str,
        bytes: &[u8],
        preview: Option<PreviewHandle>,
    ) -> VidmarkResult<&MediaMetadata> {
        let resp = match service.upload(filename, bytes) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "upload failed");
                return Err(err);
            }
        };
        tracing::info!(filename = %resp.filename, duration = resp.duration, "upload complete");
        self.install_media(MediaMetadata::from(resp), preview);
        self.media
            .as_ref()
            .ok_or_else(|| VidmarkError::upload("media selection missing after upload"))
    }

    fn install_media(&mut self, meta: MediaMetadata, preview: Option<PreviewHandle>) {
        self.preview = preview;
        self.media = Some(meta);
        self.store.clear();
        self.dragged = None;
        self.scrub.release();
        self.clock.reset();
        self.engine.pause();
        self.engine.set_position_sec(0.0);
        self.recompute_overlay();
    }

    /// Host decoder reported metadata for the current selection.
    pub fn metadata_loaded(&mut self, decoded: DecodedMetadata) {
        if let Some(meta) = self.media.as_mut() {
            meta.refine(decoded);
            self.recompute_overlay();
        }
    }

    /// Drop the current selection and everything authored on it.
    pub fn close_media(&mut self) {
        self.preview = None;
        self.media = None;
        self.store.clear();
        self.dragged = None;
        self.scrub.release();
        self.hover.cancel();
        self.clock.reset();
        self.engine.pause();
        self.recompute_overlay();
    }

    /// The media container was laid out or resized.
    pub fn container_resized(&mut self, size: Size) {
        self.container = Some(size);
        self.recompute_overlay();
    }

    fn recompute_overlay(&mut self) {
        let aspect = self.media.as_ref().and_then(MediaMetadata::aspect_ratio);
        self.overlay = match (self.container, aspect) {
            (Some(c), Some(a)) => compute_overlay_rect(c, a),
            _ => None,
        };
    }

    /// Click on the media surface: place an annotation at the current time and pause.
    #[tracing::instrument(skip(self))]
    pub fn click(&mut self, pointer: Point, now_ms: u64) -> VidmarkResult<ClickOutcome> {
        if self.dragged.is_some() {
            return Ok(ClickOutcome::Dragging);
        }
        let (Some(rect), Some(media)) = (self.overlay, self.media_size()) else {
            return Ok(ClickOutcome::NotReady);
        };
        let Some(at) = to_media_space(pointer, rect, media, MapMode::Place) else {
            return Ok(ClickOutcome::OutsideFrame);
        };

        let t = self.clock.current_time_sec();
        let id = self.store.place(at, t, &self.config.defaults, now_ms)?.id;
        self.clock.pause(&mut self.engine);
        tracing::debug!(%id, x = at.x, y = at.y, t, "placed annotation");
        Ok(ClickOutcome::Placed(id))
    }

    /// Pointer pressed on an existing marker. Pauses playback. Returns `false` for unknown ids.
    pub fn begin_drag(&mut self, id: AnnotationId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.dragged = Some(id);
        self.clock.pause(&mut self.engine);
        true
    }

    /// Pointer moved over the media surface.
    ///
    /// Counts as interaction for hover-gated labels. While a drag is in progress the dragged
    /// annotation follows the pointer, clamped onto the frame; its new media position is
    /// returned.
    pub fn pointer_move(&mut self, pointer: Point, now: Duration) -> Option<Point> {
        self.hover.touch(now);
        let id = self.dragged?;
        let media = self.media_size()?;
        let at = to_media_space(pointer, self.overlay?, media, MapMode::Drag)?;
        if self.store.drag(id, at, media) {
            Some(at)
        } else {
            // The annotation went away mid-drag.
            self.dragged = None;
            None
        }
    }

    /// Pointer released. Returns the annotation that was being dragged, if any.
    pub fn end_drag(&mut self) -> Option<AnnotationId> {
        self.dragged.take()
    }

    /// Pointer left the media surface: hover-gated labels hide immediately and any drag ends.
    pub fn pointer_leave(&mut self) -> Option<AnnotationId> {
        self.hover.cancel();
        self.dragged.take()
    }

    /// Drive timers. Returns `true` when hover-gated labels just hid.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.hover.poll(now)
    }

    /// Pointer pressed on the timeline track; seeks immediately.
    pub fn timeline_press(&mut self, pointer_x: f64, track: Rect) -> f64 {
        let total = self.timeline_duration();
        let t = self.scrub.press(pointer_x, track, total);
        self.clock.seek(t, &mut self.engine);
        t
    }

    /// Pointer moved anywhere while the timeline is pressed.
    pub fn timeline_move(&mut self, pointer_x: f64) -> Option<f64> {
        let t = self.scrub.drag_to(pointer_x)?;
        self.clock.seek(t, &mut self.engine);
        Some(t)
    }

    /// Pointer released after scrubbing.
    pub fn timeline_release(&mut self) -> bool {
        self.scrub.release()
    }

    /// Start playback; a refusing engine leaves the session paused.
    pub fn play(&mut self) -> PlayOutcome {
        self.clock.play(&mut self.engine)
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.clock.pause(&mut self.engine);
    }

    /// Flip play/pause.
    pub fn toggle_play(&mut self) -> Option<PlayOutcome> {
        self.clock.toggle(&mut self.engine)
    }

    /// Seek to `t` seconds.
    pub fn seek(&mut self, t: f64) {
        self.clock.seek(t, &mut self.engine);
    }

    /// Engine reported a new playback position.
    pub fn time_update(&mut self, t: f64) {
        self.clock.on_time_update(t);
    }

    /// Replace the defaults used for future placements.
    pub fn set_defaults(&mut self, defaults: AuthoringDefaults) -> VidmarkResult<()> {
        defaults.validate()?;
        self.config.defaults = defaults;
        Ok(())
    }

    /// Field-level edit of an existing annotation.
    pub fn edit(&mut self, id: AnnotationId, edit: &AnnotationEdit) -> VidmarkResult<bool> {
        self.store.edit(id, edit)
    }

    /// Undo the most recent placement.
    pub fn remove_last(&mut self) -> Option<Annotation> {
        let removed = self.store.remove_last()?;
        if self.dragged == Some(removed.id) {
            self.dragged = None;
        }
        Some(removed)
    }

    /// Remove every annotation.
    pub fn clear(&mut self) {
        self.store.clear();
        self.dragged = None;
    }

    /// Send the current annotations to `service` for burning in. Session state is left as is
    /// whether or not the render succeeds.
    #[tracing::instrument(skip(self, service), fields(annotations = self.store.len()))]
    pub fn export(
        &self,
        service: &mut impl RenderService,
        keep_audio: bool,
    ) -> VidmarkResult<RenderResponse> {
        let req = self.render_request(keep_audio)?;
        match service.render(&req) {
            Ok(resp) => {
                tracing::info!(url = %resp.url, "render complete");
                Ok(resp)
            }
            Err(err) => {
                tracing::warn!(error = %err, "render failed");
                Err(err)
            }
        }
    }

    /// Render request for the current media and annotations.
    pub fn render_request(&self, keep_audio: bool) -> VidmarkResult<RenderRequest> {
        let media = self
            .media
            .as_ref()
            .ok_or_else(|| VidmarkError::validation("no media selected"))?;
        let req = RenderRequest {
            filename: media.filename.clone(),
            annotations: self.store.as_slice().to_vec(),
            keep_audio,
        };
        req.validate()?;
        Ok(req)
    }

    /// Annotations active at the current playback time, in creation order.
    pub fn active_annotations(&self) -> Vec<&Annotation> {
        active_at(self.clock.current_time_sec(), &self.store)
    }

    /// Inputs to the label gate at `now`.
    pub fn label_context(&self, now: Duration) -> LabelContext {
        LabelContext {
            dragged_id: self.dragged,
            hovering: self.hover.is_hovering(now),
        }
    }

    /// Timeline length: the media duration once known, otherwise the configured fallback.
    pub fn timeline_duration(&self) -> f64 {
        self.media
            .as_ref()
            .and_then(MediaMetadata::duration_sec)
            .unwrap_or(self.config.fallback_duration_sec)
    }

    /// Timeline clip placement for every annotation.
    pub fn clip_layouts(&self) -> Vec<(AnnotationId, ClipLayout)> {
        let total = self.timeline_duration();
        self.store
            .iter()
            .filter_map(|a| layout(a, total).map(|l| (a.id, l)))
            .collect()
    }

    /// Playhead position in percent of the timeline.
    pub fn playhead_pct(&self) -> Option<f64> {
        playhead_pct(self.clock.current_time_sec(), self.timeline_duration())
    }

    /// Ruler ticks for the current timeline length.
    pub fn ruler(&self) -> Vec<RulerTick> {
        ruler(
            self.timeline_duration(),
            self.config.ruler_ticks,
            self.config.ruler_label_every,
        )
    }

    /// Where annotation `id`'s marker sits inside the container.
    pub fn marker_position(&self, id: AnnotationId) -> Option<Point> {
        let ann = self.store.get(id)?;
        Some(to_container_space(ann.position, self.overlay?, self.media_size()?))
    }

    /// Overlay geometry for the preview at the current time, with labels gated at `now`.
    pub fn preview_plan(&self, now: Duration, measure: &dyn TextMeasure) -> Option<OverlayPlan> {
        Some(plan_preview(
            &self.store,
            self.media_size()?,
            self.clock.current_time_sec(),
            measure,
            self.label_context(now),
        ))
    }

    /// Annotations in creation order.
    pub fn annotations(&self) -> &AnnotationStore {
        &self.store
    }

    /// Current selection's metadata.
    pub fn media(&self) -> Option<&MediaMetadata> {
        self.media.as_ref()
    }

    /// Current selection's preview resource.
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    fn media_size(&self) -> Option<MediaSize> {
        self.media.as_ref().and_then(MediaMetadata::media_size)
    }

    /// Current overlay rect, if frame geometry is known.
    pub fn overlay_rect(&self) -> Option<OverlayRect> {
        self.overlay
    }

    /// Playback state.
    pub fn play_state(&self) -> PlayState {
        self.clock.state()
    }

    /// Current playback time in seconds.
    pub fn current_time_sec(&self) -> f64 {
        self.clock.current_time_sec()
    }

    /// Annotation currently being dragged.
    pub fn dragged(&self) -> Option<AnnotationId> {
        self.dragged
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Host engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Host engine, mutably (e.g. to advance a simulated position).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor_session.rs"]
mod tests;
