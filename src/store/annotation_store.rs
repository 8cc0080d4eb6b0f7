use crate::{
    config::editor_config::AuthoringDefaults,
    foundation::core::{MediaSize, Point, TimeWindow},
    foundation::error::VidmarkResult,
    model::annotation::{Annotation, AnnotationEdit, AnnotationId},
};

/// Hands out session-unique ids from millisecond timestamps.
///
/// Two placements within the same millisecond (or a clock that steps backwards) still get
/// strictly increasing ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdAllocator {
    last: Option<u64>,
}

impl IdAllocator {
    /// Allocate the next id for a creation at `now_ms`.
    pub fn next(&mut self, now_ms: u64) -> AnnotationId {
        let id = match self.last {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last = Some(id);
        AnnotationId(id)
    }
}

/// Ordered, exclusively owned collection of annotations.
///
/// Order is append order; it drives remove-last and the `Task N` placeholder numbering.
/// Every operation is total: misses are no-ops, never partial writes.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    items: Vec<Annotation>,
    ids: IdAllocator,
}

impl AnnotationStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records (e.g. a render request read back from disk).
    ///
    /// Later placements get ids above every id already present.
    pub fn from_annotations(items: Vec<Annotation>) -> Self {
        let last = items.iter().map(|a| a.id.0).max();
        Self {
            items,
            ids: IdAllocator { last },
        }
    }

    /// Append a new annotation built from `defaults` at the media-space `point`.
    ///
    /// `point` must already be an in-frame coordinate; `time_sec` is the playback time of the
    /// click and becomes the window start (negative times are floored at zero).
    pub fn place(
        &mut self,
        point: Point,
        time_sec: f64,
        defaults: &AuthoringDefaults,
        now_ms: u64,
    ) -> VidmarkResult<&Annotation> {
        let start = if time_sec.is_finite() {
            time_sec.max(0.0)
        } else {
            0.0
        };
        let time_window = TimeWindow::new(start, defaults.duration_sec)?;
        let text = if defaults.text.trim().is_empty() {
            format!("Task {}", self.items.len() + 1)
        } else {
            defaults.text.clone()
        };

        let ann = Annotation {
            id: self.ids.next(now_ms),
            position: point,
            time_window,
            text,
            marker_kind: defaults.marker_kind,
            label_style: defaults.label_style,
            visuals: defaults.visuals.clone(),
            always_visible: defaults.always_visible,
        };
        self.items.push(ann);
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Move annotation `id` to `point`, clamped into `media`. Returns `false` (and changes
    /// nothing) for unknown ids.
    pub fn drag(&mut self, id: AnnotationId, point: Point, media: MediaSize) -> bool {
        match self.get_mut(id) {
            Some(ann) => {
                ann.position = media.clamp_point(point);
                true
            }
            None => false,
        }
    }

    /// Apply a field-level edit. `Ok(false)` for unknown ids; errors leave the record intact.
    pub fn edit(&mut self, id: AnnotationId, edit: &AnnotationEdit) -> VidmarkResult<bool> {
        let Some(ann) = self.get_mut(id) else {
            return Ok(false);
        };
        edit.apply_to(ann)?;
        Ok(true)
    }

    /// Drop the most recently appended annotation, if any.
    pub fn remove_last(&mut self) -> Option<Annotation> {
        self.items.pop()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up by id.
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.items.iter().find(|a| a.id == id)
    }

    fn get_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.items.iter_mut().find(|a| a.id == id)
    }

    /// Annotations in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Annotation] {
        &self.items
    }

    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` when the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationStore {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/annotation_store.rs"]
mod tests;
