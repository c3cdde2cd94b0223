use std::process;
use std::sync::Arc;

use iced::Size;

use order_viewer::api::HttpOrderApi;
use order_viewer::app::State;
use order_viewer::config;
use order_viewer::render::RenderOptions;

fn main() -> iced::Result {
    order_viewer::init_tracing("info");

    let config = config::load();

    let api = match HttpOrderApi::new(&config.api) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Cannot start: {}", e);
            process::exit(2);
        }
    };
    let options = RenderOptions::from(&config.display);

    tracing::info!("Starting Order Viewer against {}", config.api.base_url);

    iced::application(
        move || State::new(Arc::new(api.clone()), options.clone()),
        State::update,
        State::view,
    )
    .title(State::title)
    .theme(State::theme)
    .window_size(Size::new(config.window.width, config.window.height))
    .run()
}
