// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod services;
mod settings;
mod startup;
mod state;
mod ui;

use services::PlaybackService;
use settings::SettingsStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;
    let viewer = ViewerWindow::new()?;

    let store = SettingsStore::default_location();
    let loaded = store.load();
    let app_state = state::AppState::new(store);
    let playback = PlaybackService::new(
        app_state.slideshow.clone(),
        app_state.playback_timer.clone(),
    );

    startup::apply_settings(&app, &viewer, &app_state, &playback, &loaded);
    startup::setup_window_hooks(&app, &viewer, &app_state, &playback);
    ui::setup_handlers(&app, &viewer, &app_state, &playback);

    app.run()?;

    Ok(())
}
