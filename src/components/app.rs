use touch_sprite_detector::TouchContext;
use touch_sprite_detector::config::AppConfig;
use touch_sprite_detector::model::QueryTarget;
use yew::prelude::*;

use super::{sprite_panel::SpritePanel, stage_controls::StageControls, stage_view::StageView};

const SPRITE_COLORS: [&str; 6] = ["#d4af37", "#58a6ff", "#f85149", "#3fb950", "#bc8cff", "#ff7b72"];
const SPRITE_SIZE: f64 = 80.0;

/// Stand-in for a runtime sprite: a name and the geometry the queries run against.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub name: String,
    pub target: QueryTarget,
    pub color: &'static str,
}

/// Places `count` sprites at random inside the stage, clear of the edges.
pub fn scatter_sprites(count: usize, stage_width: f64, stage_height: f64) -> Vec<Sprite> {
    let span_x = (stage_width - SPRITE_SIZE).max(0.0);
    let span_y = (stage_height - SPRITE_SIZE).max(0.0);
    (0..count)
        .map(|i| {
            let x = (js_sys::Math::random() - 0.5) * span_x;
            let y = (js_sys::Math::random() - 0.5) * span_y;
            Sprite {
                name: format!("Sprite{}", i + 1),
                target: QueryTarget::centered(x.round(), y.round(), SPRITE_SIZE, SPRITE_SIZE),
                color: SPRITE_COLORS[i % SPRITE_COLORS.len()],
            }
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let touch_ctx = use_reducer({
        let config = config.clone();
        move || TouchContext::new(config.viewport(), config.prune_on_end)
    });
    let sprites = use_state({
        let config = config.clone();
        move || scatter_sprites(config.demo_sprites, config.stage.width, config.stage.height)
    });

    let on_scatter = {
        let sprites = sprites.clone();
        let touch_ctx = touch_ctx.clone();
        let count = config.demo_sprites;
        Callback::from(move |_| {
            sprites.set(scatter_sprites(count, touch_ctx.stage_width(), touch_ctx.stage_height()));
        })
    };

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:16px; padding:16px; background:#0e1116; color:#c9d1d9; min-height:100vh; box-sizing:border-box; font-family:sans-serif;">
            <StageView ctx={touch_ctx.clone()} sprites={(*sprites).clone()} config={config.clone()} />
            <div style="display:flex; flex-direction:column; gap:12px; min-width:260px;">
                <StageControls ctx={touch_ctx.clone()} on_scatter={on_scatter} />
                <SpritePanel ctx={touch_ctx.clone()} sprites={(*sprites).clone()} />
            </div>
        </div>
    }
}
