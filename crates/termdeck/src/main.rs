mod app;
mod apps;
mod commands;
mod config;
mod events;
mod keymap;
mod logging;
mod store;

fn main() -> std::io::Result<()> {
    logging::init();
    app::run()
}
