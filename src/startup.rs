//! Startup wiring: settings restoration and window-level event hooks.

use crate::services::PlaybackService;
use crate::settings::Settings;
use crate::state::AppState;
use crate::ui;
use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::{winit::event::WindowEvent, EventResult};
use log::debug;
use slint::ComponentHandle;
use std::path::PathBuf;

/// Seeds application state and UI properties from a loaded settings snapshot,
/// then performs the initial catalog scan and shows the first image.
pub fn apply_settings(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
    settings: &Settings,
) {
    {
        let mut slideshow = state.slideshow.lock().unwrap();
        slideshow.restore(
            settings.folders.clone(),
            settings.play_order,
            settings.include_subfolders,
        );
    }
    playback.set_interval(settings.interval, |_: PathBuf| {});

    let view_state = app.global::<crate::ViewState>();
    view_state.set_play_order(settings.play_order.label().into());
    view_state.set_interval_secs(playback.interval_secs() as i32);
    view_state.set_always_on_top(settings.always_on_top);
    view_state.set_use_viewer_window(settings.use_viewer_window);
    view_state.set_include_subfolders(settings.include_subfolders);
    viewer.set_keep_on_top(settings.always_on_top);

    let geometry = settings.viewer_geometry;
    viewer
        .window()
        .set_position(slint::PhysicalPosition::new(geometry.x, geometry.y));
    viewer
        .window()
        .set_size(slint::PhysicalSize::new(geometry.width, geometry.height));

    ui::handlers::refresh_folder_view(app, state);
    ui::handlers::show_current(app, viewer, state);
    debug!("Applied startup settings: {:?}", settings);
}

/// Installs winit-level hooks: folder drag-and-drop onto the main window and
/// geometry persistence when the viewer window moves or resizes.
pub fn setup_window_hooks(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
) {
    {
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        app.window().on_winit_window_event(move |_window, event| {
            if let WindowEvent::DroppedFile(path) = event {
                if path.is_dir() {
                    if let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade())
                    {
                        ui::handlers::add_folders(
                            &app,
                            &viewer,
                            &state,
                            &playback,
                            vec![path.clone()],
                        );
                    }
                }
            }
            EventResult::Propagate
        });
    }

    {
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        viewer.window().on_winit_window_event(move |_window, event| {
            if matches!(event, WindowEvent::Moved(_) | WindowEvent::Resized(_)) {
                if let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) {
                    ui::handlers::persist(&app, &viewer, &state, &playback);
                }
            }
            EventResult::Propagate
        });
    }
}
