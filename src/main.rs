use gtk4::prelude::*;
use gtk4::Application;

use gridgames::ui;

const APP_ID: &str = "org.gridgames.GridGames";

fn init_logging() {
    env_logger::init();
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(ui::window::build_ui);
    app.run()
}
