use touch_sprite_detector::TouchContext;
use touch_sprite_detector::opcode::{self, BlockValue, Opcode};
use touch_sprite_detector::util::format_number;
use yew::prelude::*;

use super::app::Sprite;

const SPRITE_REPORTERS: [Opcode; 4] = [
    Opcode::IsTouchingSprite,
    Opcode::DistanceToClosestFinger,
    Opcode::ClosestFingerX,
    Opcode::ClosestFingerY,
];

#[derive(Properties, PartialEq, Clone)]
pub struct SpritePanelProps {
    pub ctx: UseReducerHandle<TouchContext>,
    pub sprites: Vec<Sprite>,
}

fn display(value: BlockValue) -> String {
    match value {
        BlockValue::Number(n) => format_number(n),
        other => other.to_string(),
    }
}

#[function_component]
pub fn SpritePanel(props: &SpritePanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let touches = props.ctx.registry().len();

    let cards = props.sprites.iter().map(|sprite| {
        let rows = SPRITE_REPORTERS.iter().map(|&op| {
            let value = match opcode::report(&props.ctx, op, Some(&sprite.target)) {
                Ok(v) => display(v),
                Err(e) => e.to_string(),
            };
            html! {
                <div style={row_style}>
                    <span style={label_style}>{ op.label() }</span>
                    <span style={value_style}>{ value }</span>
                </div>
            }
        });
        html! {
            <div style="display:flex; flex-direction:column; gap:6px; border-top:1px solid #30363d; padding-top:8px;">
                <span style={format!("font-weight:600; color:{};", sprite.color)}>
                    { format!("{} @ ({}, {})", sprite.name, format_number(sprite.target.x), format_number(sprite.target.y)) }
                </span>
                { for rows }
            </div>
        }
    });

    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"Active touches"}</span>
                <span style={value_style}>{ touches }</span>
            </div>
            { for cards }
        </div>
    }
}
