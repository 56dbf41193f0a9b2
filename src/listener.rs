//! Browser side of ingestion: DOM touch events in, typed [`TouchAction`]s out.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, EventTarget, TouchEvent, TouchList};

use crate::context::TouchAction;
use crate::error::{Error, Result};
use crate::ingest::{EndBatch, MoveBatch};
use crate::model::{RawTouch, SurfaceRect, TouchId};

/// Where narrowed batches go. Usually a reducer dispatcher.
pub type TouchSink = Rc<dyn Fn(TouchAction)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    MoveOrStart,
    EndOrCancel,
}

/// Every DOM event the listener handles, and which batch it produces.
const SUBSCRIPTIONS: [(&str, Phase); 4] = [
    ("touchstart", Phase::MoveOrStart),
    ("touchmove", Phase::MoveOrStart),
    ("touchend", Phase::EndOrCancel),
    ("touchcancel", Phase::EndOrCancel),
];

/// Handlers never call `preventDefault`, so the browser may scroll without waiting on them.
const PASSIVE: bool = true;

fn listener_options() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_passive(PASSIVE);
    options
}

pub fn find_surface(selector: &str) -> Result<Element> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .ok_or_else(|| Error::SurfaceNotFound(selector.to_string()))
}

pub fn surface_rect(surface: &Element) -> SurfaceRect {
    let rect = surface.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn raw_touches(list: &TouchList) -> Vec<RawTouch> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| RawTouch {
            id: TouchId(t.identifier()),
            pixel_x: t.client_x() as f64,
            pixel_y: t.client_y() as f64,
        })
        .collect()
}

pub fn touch_ids(list: &TouchList) -> Vec<TouchId> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchId(t.identifier()))
        .collect()
}

/// Live subscription to the four touch lifecycle events. Dropping it unsubscribes.
pub struct TouchListener {
    target: EventTarget,
    move_cb: Closure<dyn FnMut(TouchEvent)>,
    end_cb: Closure<dyn FnMut(TouchEvent)>,
}

impl TouchListener {
    /// Listens on `target` and measures `surface` on every start/move.
    pub fn subscribe(target: EventTarget, surface: Element, prune_on_end: bool, sink: TouchSink) -> Self {
        let move_cb = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let batch = MoveBatch {
                    touches: raw_touches(&e.touches()),
                    surface: surface_rect(&surface),
                };
                sink(TouchAction::MoveOrStart(batch));
            }) as Box<dyn FnMut(_)>)
        };
        let end_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
            let batch = EndBatch {
                changed: touch_ids(&e.changed_touches()),
                remaining: prune_on_end.then(|| touch_ids(&e.touches())),
            };
            sink(TouchAction::EndOrCancel(batch));
        }) as Box<dyn FnMut(_)>);

        let listener = Self { target, move_cb, end_cb };
        let options = listener_options();
        for (name, phase) in SUBSCRIPTIONS {
            let added = listener.target.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                listener.callback(phase).as_ref().unchecked_ref(),
                &options,
            );
            if let Err(err) = added {
                warn!("could not subscribe to {name}: {err:?}");
            }
        }
        debug!("touch listener subscribed (prune_on_end={prune_on_end}, passive={PASSIVE})");
        listener
    }

    fn callback(&self, phase: Phase) -> &Closure<dyn FnMut(TouchEvent)> {
        match phase {
            Phase::MoveOrStart => &self.move_cb,
            Phase::EndOrCancel => &self.end_cb,
        }
    }
}

impl Drop for TouchListener {
    fn drop(&mut self) {
        for (name, phase) in SUBSCRIPTIONS {
            let _ = self
                .target
                .remove_event_listener_with_callback(name, self.callback(phase).as_ref().unchecked_ref());
        }
        debug!("touch listener unsubscribed");
    }
}
