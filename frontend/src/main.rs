use crate::app::App;

mod app;
mod components;
mod config;

fn main() {
    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::warn!("logger already installed");
    }
    yew::Renderer::<App>::new().render();
}
