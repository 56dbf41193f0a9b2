mod components;

use components::app::{App, AppProps};
use touch_sprite_detector::config::AppConfig;
use touch_sprite_detector::util;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level());
    log::info!("stage {}x{}, surface `{}`", config.stage.width, config.stage.height, config.surface_selector);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
