use crate::model::annotation::{Annotation, AnnotationId};

/// Annotations whose closed window `[start, start + duration]` contains `time_sec`, in
/// creation order.
///
/// Pure in `(time_sec, annotations)`: callers re-run it on every clock tick and diff the result.
pub fn active_at<'a, I>(time_sec: f64, annotations: I) -> Vec<&'a Annotation>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    annotations
        .into_iter()
        .filter(|a| a.time_window.contains(time_sec))
        .collect()
}

/// Transient interaction signals that gate label display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelContext {
    /// Annotation currently being dragged, if any (a lookup key, not a reference).
    pub dragged_id: Option<AnnotationId>,
    /// Pointer has interacted with the media surface within the hover window.
    pub hovering: bool,
}

/// Whether an *active* annotation shows its label.
pub fn label_visible(ann: &Annotation, ctx: LabelContext) -> bool {
    ann.always_visible || ctx.dragged_id == Some(ann.id) || ctx.hovering
}

#[cfg(test)]
#[path = "../../tests/unit/visibility/filter.rs"]
mod tests;
