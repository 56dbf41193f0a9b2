use std::rc::Rc;

use log::{info, warn};
use touch_sprite_detector::config::AppConfig;
use touch_sprite_detector::listener::{TouchListener, TouchSink, find_surface};
use touch_sprite_detector::mapper::map_to_surface;
use touch_sprite_detector::model::Point;
use touch_sprite_detector::{TouchAction, TouchContext};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Element, EventTarget, HtmlCanvasElement};
use yew::prelude::*;

use super::app::Sprite;

const TOUCH_RADIUS: f64 = 14.0;

#[derive(Properties, PartialEq, Clone)]
pub struct StageViewProps {
    pub ctx: UseReducerHandle<TouchContext>,
    pub sprites: Vec<Sprite>,
    pub config: AppConfig,
}

/// Hooks the tracker to the configured surface. Falls back to the stage canvas when the
/// selector matches nothing.
fn subscribe(canvas_ref: &NodeRef, config: &AppConfig, dispatcher: UseReducerDispatcher<TouchContext>) -> Option<TouchListener> {
    let surface: Element = match find_surface(&config.surface_selector) {
        Ok(el) => el,
        Err(e) => {
            warn!("{e}; using the stage canvas");
            canvas_ref.cast::<Element>()?
        }
    };
    let target: EventTarget = if config.listen_on_window {
        web_sys::window()?.into()
    } else {
        surface.clone().into()
    };
    let sink: TouchSink = Rc::new(move |action: TouchAction| dispatcher.dispatch(action));
    info!("tracking touches on `{}`", config.surface_selector);
    Some(TouchListener::subscribe(target, surface, config.prune_on_end, sink))
}

/// Keeps the canvas backing store at its on-screen size.
fn fit_canvas(canvas: &HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(rect.width().max(1.0) as u32);
    canvas.set_height(rect.height().max(1.0) as u32);
}

fn draw(canvas: &HtmlCanvasElement, ctx: &TouchContext, sprites: &[Sprite]) {
    if !canvas.is_connected() {
        return;
    }
    let Some(g) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let vp = ctx.viewport();
    let to_px = |p: Point| map_to_surface(p, w, h, vp);

    g.set_fill_style_str("#161b22");
    g.fill_rect(0.0, 0.0, w, h);
    // axes through the stage origin
    let (ox, oy) = to_px(Point::default());
    g.set_stroke_style_str("#2f3641");
    g.set_line_width(1.0);
    g.begin_path();
    g.move_to(ox, 0.0);
    g.line_to(ox, h);
    g.move_to(0.0, oy);
    g.line_to(w, oy);
    g.stroke();

    for sprite in sprites {
        let b = sprite.target.bounds;
        let (l, t) = to_px(Point::new(b.left, b.top));
        let (r, btm) = to_px(Point::new(b.right, b.bottom));
        g.set_fill_style_str(sprite.color);
        g.set_global_alpha(if ctx.is_touching(&sprite.target) { 0.9 } else { 0.35 });
        g.fill_rect(l, t, r - l, btm - t);
        g.set_global_alpha(1.0);
        if let Some(closest) = ctx.closest(&sprite.target) {
            let (sx, sy) = to_px(sprite.target.position());
            let (cx, cy) = to_px(closest);
            g.set_stroke_style_str(sprite.color);
            g.begin_path();
            g.move_to(sx, sy);
            g.line_to(cx, cy);
            g.stroke();
        }
    }

    g.set_fill_style_str("#c9d1d9");
    for (id, p) in ctx.registry().positions() {
        let (x, y) = to_px(p);
        g.begin_path();
        g.arc(x, y, TOUCH_RADIUS, 0.0, std::f64::consts::PI * 2.0).ok();
        g.fill();
        g.fill_text(&id.0.to_string(), x + TOUCH_RADIUS, y - TOUCH_RADIUS).ok();
    }
}

#[function_component(StageView)]
pub fn stage_view(props: &StageViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Subscribe once; the reducer dispatcher stays valid for the component's life.
    {
        let canvas_ref = canvas_ref.clone();
        let dispatcher = props.ctx.dispatcher();
        let config = props.config.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((), move |_| {
            let listener = subscribe(&canvas_ref, &config, dispatcher);
            let window = web_sys::window();
            let resize_cb = {
                let canvas_ref = canvas_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        fit_canvas(&canvas);
                    }
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .ok();
            }
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                fit_canvas(&canvas);
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    // Redraw whenever the tracker or the sprites change.
    {
        let canvas_ref = canvas_ref.clone();
        let ctx = props.ctx.clone();
        let sprites = props.sprites.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((props.ctx.version, props.sprites.clone()), move |_| {
            let draw_closure: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw(&canvas, &ctx, &sprites);
                }
            });
            (draw_closure)();
            *draw_ref.borrow_mut() = Some(draw_closure);
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="flex:1 1 480px; max-width:960px; aspect-ratio:4 / 3; touch-action:none; border:1px solid #30363d; border-radius:8px;"
        />
    }
}
