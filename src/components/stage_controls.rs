use serde_json::json;
use touch_sprite_detector::opcode::{self, Opcode};
use touch_sprite_detector::util::format_number;
use touch_sprite_detector::{TouchAction, TouchContext};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StageControlsProps {
    pub ctx: UseReducerHandle<TouchContext>,
    pub on_scatter: Callback<()>,
}

#[function_component]
pub fn StageControls(props: &StageControlsProps) -> Html {
    let width_ref = use_node_ref();
    let height_ref = use_node_ref();

    let apply_cb = {
        let ctx = props.ctx.clone();
        let width_ref = width_ref.clone();
        let height_ref = height_ref.clone();
        Callback::from(move |_| {
            let read = |r: &NodeRef| r.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
            let (width, height) = opcode::stage_size_args(&json!({
                "WIDTH": read(&width_ref),
                "HEIGHT": read(&height_ref),
            }));
            ctx.dispatch(TouchAction::SetStageSize { width, height });
        })
    };
    let reset_cb = {
        let ctx = props.ctx.clone();
        Callback::from(move |_| ctx.dispatch(TouchAction::Reset))
    };
    let scatter_cb = {
        let cb = props.on_scatter.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let reporter = |op: Opcode| {
        opcode::report(&props.ctx, op, None)
            .map(|v| v.to_string())
            .unwrap_or_else(|e| e.to_string())
    };
    let width = props.ctx.stage_width();
    let height = props.ctx.stage_height();

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
        <div style="display:flex; gap:6px; align-items:center;">
            <label>{"W"}</label>
            <input ref={width_ref} type="text" size="6" value={format_number(width)} />
            <label>{"H"}</label>
            <input ref={height_ref} type="text" size="6" value={format_number(height)} />
            <button onclick={apply_cb}>{ Opcode::SetStageSize.label() }</button>
        </div>
        <div style="font-size:12px; opacity:0.8;">
            { format!("{}: {}  |  {}: {}", Opcode::GetStageWidth.label(), reporter(Opcode::GetStageWidth), Opcode::GetStageHeight.label(), reporter(Opcode::GetStageHeight)) }
        </div>
        <div style="display:flex; gap:6px;">
            <button onclick={scatter_cb}>{"Scatter sprites"}</button>
            <button onclick={reset_cb}>{"Forget touches"}</button>
        </div>
        { if props.ctx.rejected_batches > 0 {
            html!{ <div style="font-size:11px; color:#f85149;">{ format!("{} touch batch(es) dropped: surface had no size", props.ctx.rejected_batches) }</div> }
        } else { html!{} } }
    </div>}
}
