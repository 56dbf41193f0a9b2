//! The tracker's explicit state: touch registry plus stage viewport.

use std::rc::Rc;

use log::warn;
use yew::Reducible;

use crate::error::Result;
use crate::ingest::{self, EndBatch, MoveBatch};
use crate::model::{Point, QueryTarget};
use crate::query;
use crate::state::{TouchRegistry, ViewportConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct TouchContext {
    registry: TouchRegistry,
    viewport: ViewportConfig,
    /// Reconcile against the host's remaining set on end/cancel.
    prune_on_end: bool,
    /// Bumped on every applied change; lets views redraw only when needed.
    pub version: u64,
    /// Batches dropped at the boundary (degenerate surface).
    pub rejected_batches: u64,
}

impl Default for TouchContext {
    fn default() -> Self {
        Self::new(ViewportConfig::default(), true)
    }
}

impl TouchContext {
    pub fn new(viewport: ViewportConfig, prune_on_end: bool) -> Self {
        Self {
            registry: TouchRegistry::new(),
            viewport,
            prune_on_end,
            version: 0,
            rejected_batches: 0,
        }
    }

    pub fn registry(&self) -> &TouchRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    pub fn prune_on_end(&self) -> bool {
        self.prune_on_end
    }

    // ---------------- Ingestion -----------------
    pub fn on_move_or_start(&mut self, batch: &MoveBatch) -> Result<()> {
        match ingest::on_move_or_start(&mut self.registry, &self.viewport, batch) {
            Ok(()) => {
                self.version += 1;
                Ok(())
            }
            Err(e) => {
                self.rejected_batches += 1;
                Err(e)
            }
        }
    }

    pub fn on_end_or_cancel(&mut self, batch: &EndBatch) {
        if ingest::on_end_or_cancel(&mut self.registry, batch, self.prune_on_end) > 0 {
            self.version += 1;
        }
    }

    /// Forgets every contact; the viewport is kept.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.version += 1;
    }

    // ---------------- Queries -----------------
    pub fn is_touching(&self, target: &QueryTarget) -> bool {
        query::is_inside(&self.registry, &target.bounds)
    }

    /// `-1` when nothing is touching.
    pub fn distance_to_closest(&self, target: &QueryTarget) -> f64 {
        query::nearest_distance(&self.registry, target.position())
    }

    pub fn closest(&self, target: &QueryTarget) -> Option<Point> {
        query::nearest(&self.registry, target.position())
    }

    /// `0` when nothing is touching.
    pub fn closest_x(&self, target: &QueryTarget) -> f64 {
        query::nearest_x(&self.registry, target.position())
    }

    /// `0` when nothing is touching.
    pub fn closest_y(&self, target: &QueryTarget) -> f64 {
        query::nearest_y(&self.registry, target.position())
    }

    // ---------------- Stage -----------------
    pub fn set_stage_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
        self.version += 1;
    }

    pub fn stage_width(&self) -> f64 {
        self.viewport.width()
    }

    pub fn stage_height(&self) -> f64 {
        self.viewport.height()
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum TouchAction {
    MoveOrStart(MoveBatch),
    EndOrCancel(EndBatch),
    SetStageSize { width: f64, height: f64 },
    Reset,
}

impl Reducible for TouchContext {
    type Action = TouchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use TouchAction::*;
        let mut new = (*self).clone();
        match action {
            MoveOrStart(batch) => {
                if let Err(e) = new.on_move_or_start(&batch) {
                    warn!("touch batch rejected: {e}");
                }
            }
            EndOrCancel(batch) => new.on_end_or_cancel(&batch),
            SetStageSize { width, height } => new.set_stage_size(width, height),
            Reset => new.reset(),
        }
        Rc::new(new)
    }
}
