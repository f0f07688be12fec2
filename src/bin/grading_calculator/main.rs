use clap::Parser;
use macroquad::Window;

mod app;
mod constants;
mod controls;
mod hud;
mod input;
mod options;
mod render;
mod state;

fn main() {
    env_logger::init();
    let options = options::Options::parse();
    Window::from_config(app::window_conf(), app::run(options));
}
