//! Contain-fit overlay rectangle and container <-> media-space mapping.
//!
//! The media surface keeps its aspect ratio inside an arbitrarily sized container, leaving
//! letterbox (top/bottom) or pillarbox (left/right) bars. Pointer positions arrive relative to
//! the container; annotations live in media pixel space.

use crate::foundation::core::{MediaSize, Point, Size, clamp_finite};

/// Sub-region of the container where the media is actually drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayRect {
    /// Rendered width.
    pub width: f64,
    /// Rendered height.
    pub height: f64,
    /// Offset from the container's left edge.
    pub left: f64,
    /// Offset from the container's top edge.
    pub top: f64,
}

impl OverlayRect {
    /// Whether `p` lies inside the rectangle, edges included.
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// How out-of-frame pointers are treated by [`to_media_space`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapMode {
    /// Placement clicks: pointers outside the overlay rect are rejected.
    Place,
    /// Drags: pointers are clamped onto the frame boundary.
    Drag,
}

/// Contain-fit `aspect` (width / height) into `container`, centered on the free axis.
///
/// Returns `None` when the container or aspect ratio is degenerate.
pub fn compute_overlay_rect(container: Size, aspect: f64) -> Option<OverlayRect> {
    let (w, h) = (container.width, container.height);
    if !(w.is_finite() && h.is_finite() && aspect.is_finite()) {
        return None;
    }
    if w <= 0.0 || h <= 0.0 || aspect <= 0.0 {
        return None;
    }

    if w / h > aspect {
        // Container relatively wider: pillarbox.
        let render_w = h * aspect;
        Some(OverlayRect {
            width: render_w,
            height: h,
            left: (w - render_w) / 2.0,
            top: 0.0,
        })
    } else {
        let render_h = w / aspect;
        Some(OverlayRect {
            width: w,
            height: render_h,
            left: 0.0,
            top: (h - render_h) / 2.0,
        })
    }
}

/// Map a container-relative pointer into media pixel space.
pub fn to_media_space(
    pointer: Point,
    rect: OverlayRect,
    media: MediaSize,
    mode: MapMode,
) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    if mode == MapMode::Place && !rect.contains(pointer) {
        return None;
    }

    let rel_x = (pointer.x - rect.left) / rect.width;
    let rel_y = (pointer.y - rect.top) / rect.height;
    Some(Point::new(
        clamp_finite(rel_x, 0.0, 1.0) * media.width_f64(),
        clamp_finite(rel_y, 0.0, 1.0) * media.height_f64(),
    ))
}

/// Inverse of [`to_media_space`]: where a media-space point sits inside the container.
pub fn to_container_space(media_point: Point, rect: OverlayRect, media: MediaSize) -> Point {
    let fx = if media.width == 0 {
        0.0
    } else {
        media_point.x / media.width_f64()
    };
    let fy = if media.height == 0 {
        0.0
    } else {
        media_point.y / media.height_f64()
    };
    Point::new(rect.left + fx * rect.width, rect.top + fy * rect.height)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/overlay.rs"]
mod tests;
