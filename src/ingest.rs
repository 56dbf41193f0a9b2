//! Typed touch batches and how they update the registry.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mapper::map_to_virtual;
use crate::model::{RawTouch, SurfaceRect, TouchId};
use crate::state::{TouchRegistry, ViewportConfig};

/// A touch-start or touch-move notification: every contact the host still reports as
/// active, plus where the surface sits on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveBatch {
    pub touches: Vec<RawTouch>,
    pub surface: SurfaceRect,
}

/// A touch-end or touch-cancel notification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndBatch {
    /// Contacts that just ended.
    pub changed: Vec<TouchId>,
    /// Contacts the host still reports as active, when it says so.
    #[serde(default)]
    pub remaining: Option<Vec<TouchId>>,
}

impl EndBatch {
    pub fn changed(ids: impl IntoIterator<Item = TouchId>) -> Self {
        Self {
            changed: ids.into_iter().collect(),
            remaining: None,
        }
    }

    pub fn with_remaining(mut self, ids: impl IntoIterator<Item = TouchId>) -> Self {
        self.remaining = Some(ids.into_iter().collect());
        self
    }
}

/// Maps and upserts every touch of the batch, then drops ids the batch no longer reports.
///
/// A degenerate surface rejects the whole batch and leaves the registry as it was.
pub fn on_move_or_start(registry: &mut TouchRegistry, viewport: &ViewportConfig, batch: &MoveBatch) -> Result<()> {
    let surface = &batch.surface;
    if surface.is_degenerate() {
        return Err(Error::DegenerateSurface {
            width: surface.width,
            height: surface.height,
        });
    }
    for touch in &batch.touches {
        let pos = map_to_virtual(touch.pixel_x, touch.pixel_y, surface, viewport);
        registry.upsert(touch.id, pos);
    }
    let pruned = registry.reconcile(batch.touches.iter().map(|t| t.id));
    if pruned > 0 {
        debug!("pruned {pruned} stale touch(es) on move");
    }
    Ok(())
}

/// Removes every ended contact. With `prune` set and a `remaining` set present, also drops
/// anything the host no longer reports as active. Returns how many entries went away.
pub fn on_end_or_cancel(registry: &mut TouchRegistry, batch: &EndBatch, prune: bool) -> usize {
    let mut removed = batch.changed.iter().filter(|id| registry.remove(**id)).count();
    if prune {
        if let Some(remaining) = &batch.remaining {
            let stale = registry.reconcile(remaining.iter().copied());
            if stale > 0 {
                debug!("pruned {stale} stale touch(es) on end");
            }
            removed += stale;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    const SURFACE: SurfaceRect = SurfaceRect { left: 0.0, top: 0.0, width: 640.0, height: 480.0 };

    fn raw(id: i32, x: f64, y: f64) -> RawTouch {
        RawTouch { id: TouchId(id), pixel_x: x, pixel_y: y }
    }

    fn batch(touches: Vec<RawTouch>) -> MoveBatch {
        MoveBatch { touches, surface: SURFACE }
    }

    #[test]
    fn move_batch_maps_into_virtual_space() {
        let mut reg = TouchRegistry::new();
        let vp = ViewportConfig::default();
        on_move_or_start(&mut reg, &vp, &batch(vec![raw(1, 320.0, 240.0), raw(2, 0.0, 0.0)])).unwrap();
        assert_eq!(reg.get(TouchId(1)), Some(Point::new(0.0, 0.0)));
        assert_eq!(reg.get(TouchId(2)), Some(Point::new(-320.0, 240.0)));
    }

    #[test]
    fn move_batch_prunes_missing_ids() {
        let mut reg = TouchRegistry::new();
        let vp = ViewportConfig::default();
        on_move_or_start(&mut reg, &vp, &batch(vec![raw(1, 0.0, 0.0), raw(2, 1.0, 1.0), raw(3, 2.0, 2.0)])).unwrap();
        on_move_or_start(&mut reg, &vp, &batch(vec![raw(1, 5.0, 5.0), raw(3, 6.0, 6.0)])).unwrap();
        let ids: Vec<i32> = reg.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn degenerate_surface_leaves_registry_alone() {
        let mut reg = TouchRegistry::new();
        let vp = ViewportConfig::default();
        reg.upsert(TouchId(4), Point::new(1.0, 1.0));
        let bad = MoveBatch {
            touches: vec![raw(9, 10.0, 10.0)],
            surface: SurfaceRect { width: 0.0, ..SURFACE },
        };
        let err = on_move_or_start(&mut reg, &vp, &bad).unwrap_err();
        assert_eq!(err, Error::DegenerateSurface { width: 0.0, height: 480.0 });
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(TouchId(4)), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn end_batch_removes_and_ignores_unknown_ids() {
        let mut reg = TouchRegistry::new();
        reg.upsert(TouchId(1), Point::default());
        reg.upsert(TouchId(2), Point::default());
        assert_eq!(on_end_or_cancel(&mut reg, &EndBatch::changed([TouchId(1), TouchId(42)]), true), 1);
        assert_eq!(on_end_or_cancel(&mut reg, &EndBatch::changed([TouchId(1)]), true), 0);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn end_batch_prunes_only_when_enabled() {
        let mut reg = TouchRegistry::new();
        for i in 1..=3 {
            reg.upsert(TouchId(i), Point::default());
        }
        let end = EndBatch::changed([TouchId(1)]).with_remaining([TouchId(3)]);

        let mut faithful = reg.clone();
        assert_eq!(on_end_or_cancel(&mut faithful, &end, false), 1);
        assert_eq!(faithful.len(), 2);

        assert_eq!(on_end_or_cancel(&mut reg, &end, true), 2);
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec![TouchId(3)]);
    }
}
