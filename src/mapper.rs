// Client pixels <-> virtual stage coordinates.
//
// Virtual space is centered on the surface: x grows to the right over [-w/2, w/2],
// y grows upwards over [-h/2, h/2] (screen y grows downwards).

use crate::model::{Point, SurfaceRect};
use crate::state::ViewportConfig;

/// Maps a client-pixel position onto the virtual stage.
///
/// `surface` must have a non-zero width and height; callers check
/// [`SurfaceRect::is_degenerate`] first.
pub fn map_to_virtual(pixel_x: f64, pixel_y: f64, surface: &SurfaceRect, viewport: &ViewportConfig) -> Point {
    debug_assert!(surface.width != 0.0 && surface.height != 0.0);
    let local_x = pixel_x - surface.left;
    let local_y = pixel_y - surface.top;
    let (w, h) = (viewport.width(), viewport.height());
    Point {
        x: (local_x / surface.width) * w - w / 2.0,
        y: h / 2.0 - (local_y / surface.height) * h,
    }
}

/// Inverse of [`map_to_virtual`], into surface-local pixels (origin at the surface's top-left).
pub fn map_to_surface(point: Point, surface_width: f64, surface_height: f64, viewport: &ViewportConfig) -> (f64, f64) {
    let (w, h) = (viewport.width(), viewport.height());
    let px = (point.x + w / 2.0) / w * surface_width;
    let py = (h / 2.0 - point.y) / h * surface_height;
    (px, py)
}
