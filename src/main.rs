use adw::prelude::*;
use adw::Application;

fn main() {
    let state = broker_admin::app::AppState::load();
    if let Some(dir) = broker_admin::logging::default_log_dir() {
        if let Err(e) = broker_admin::logging::init_logging(&state.log_level, &dir) {
            eprintln!("logging disabled: {e}");
        }
    }

    let app = Application::builder()
        .application_id("com.example.BrokerAdmin")
        .build();
    app.connect_activate(|app| {
        broker_admin::app::build_ui(app);
    });
    app.run();
}
