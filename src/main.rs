#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod test_doubles;

use iced::Size;

use crate::global_constants::{APPLICATION_TITLE, LOG_TAG_MAIN, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::init();

    log::info!("{} Starting Blue Screen Generator", LOG_TAG_MAIN);

    iced::application(
        app::BlueScreenApp::build,
        app::BlueScreenApp::handle_update,
        app::BlueScreenApp::render_view,
    )
    .title(APPLICATION_TITLE)
    .subscription(app::BlueScreenApp::handle_subscription)
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .run()
}
