//! Geometric queries over the registered touches.
//!
//! Every query reads the registry as it is at call time. Empty registries yield sentinels
//! rather than errors: `false` for containment, [`NO_TOUCH_DISTANCE`] for distance and `0`
//! for the nearest coordinates. `0` is a valid coordinate, so callers that must tell
//! "no touch" apart use [`nearest`] or [`nearest_distance`].

use crate::model::{Bounds, Point};
use crate::state::TouchRegistry;

/// Returned by [`nearest_distance`] when nothing is touching. Real distances are never negative.
pub const NO_TOUCH_DISTANCE: f64 = -1.0;

pub fn is_inside(registry: &TouchRegistry, bounds: &Bounds) -> bool {
    registry.positions().any(|(_, p)| bounds.contains(p))
}

/// Closest registered position to `target`, with its distance.
///
/// A candidate replaces the best only when strictly closer, so ties go to the first position
/// in registry iteration order (ascending touch id). NaN and infinite distances never win,
/// which is what happens once the stage has a degenerate size.
pub fn nearest_with_distance(registry: &TouchRegistry, target: Point) -> Option<(Point, f64)> {
    let mut min = f64::INFINITY;
    let mut best = None;
    for (_, p) in registry.positions() {
        let d = p.distance_to(target);
        if d < min {
            min = d;
            best = Some(p);
        }
    }
    best.map(|p| (p, min))
}

pub fn nearest(registry: &TouchRegistry, target: Point) -> Option<Point> {
    nearest_with_distance(registry, target).map(|(p, _)| p)
}

pub fn nearest_distance(registry: &TouchRegistry, target: Point) -> f64 {
    nearest_with_distance(registry, target).map_or(NO_TOUCH_DISTANCE, |(_, d)| d)
}

pub fn nearest_x(registry: &TouchRegistry, target: Point) -> f64 {
    nearest(registry, target).map_or(0.0, |p| p.x)
}

pub fn nearest_y(registry: &TouchRegistry, target: Point) -> f64 {
    nearest(registry, target).map_or(0.0, |p| p.y)
}
