use crate::app::App;

mod app;
mod components;
mod config;
mod gateway;
mod logging;
mod tops_sheet;
mod workspace_grid;

fn main() {
    logging::init(config::log_level());
    log::info!("space dashboard starting against {}", config::gateway_config().base_origin);
    yew::Renderer::<App>::new().render();
}
