//! Event handlers for UI callbacks.
//!
//! This is the top-level controller: every state-changing user action flows
//! through here and ends with a full settings snapshot written back to disk.
//! Persistence is never triggered from inside the state types themselves.

use crate::services::PlaybackService;
use crate::settings::{Settings, ViewerGeometry};
use crate::state::{AppState, PlayOrder};
use crate::ui::image_display;
use log::warn;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::path::PathBuf;

/// Rebuilds the folder-list model and image counter from current state.
pub(crate) fn refresh_folder_view(app: &crate::AppWindow, state: &AppState) {
    let slideshow = state.slideshow.lock().unwrap();
    let folders: Vec<slint::SharedString> = slideshow
        .folders()
        .iter()
        .map(|path| slint::SharedString::from(path.to_string_lossy().into_owned()))
        .collect();

    let view_state = app.global::<crate::ViewState>();
    view_state.set_folders(slint::ModelRc::new(slint::VecModel::from(folders)));
    view_state.set_image_count(slideshow.image_count() as i32);
}

/// Displays the catalog's current image, or clears both windows when empty.
pub(crate) fn show_current(app: &crate::AppWindow, viewer: &crate::ViewerWindow, state: &AppState) {
    let current = state.slideshow.lock().unwrap().current();
    match current {
        Some(path) => image_display::show_image(
            app.as_weak(),
            viewer.as_weak(),
            path,
            state.image_cache.clone(),
        ),
        None => image_display::clear_image(app, viewer),
    }
}

/// Assembles the full settings snapshot from live state.
fn snapshot(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
) -> Settings {
    let slideshow = state.slideshow.lock().unwrap();
    let view_state = app.global::<crate::ViewState>();
    let position = viewer.window().position();
    let size = viewer.window().size();

    Settings {
        folders: slideshow.folders().to_vec(),
        play_order: slideshow.order(),
        always_on_top: view_state.get_always_on_top(),
        use_viewer_window: view_state.get_use_viewer_window(),
        interval: playback.interval_secs(),
        include_subfolders: slideshow.include_subfolders(),
        viewer_geometry: ViewerGeometry {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        },
    }
}

pub(crate) fn persist(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
) {
    let snapshot = snapshot(app, viewer, state, playback);
    state.settings_store.save(&snapshot);
}

/// Shows the viewer window and tucks the main window away.
fn enter_viewer_mode(app: &crate::AppWindow, viewer: &crate::ViewerWindow) {
    if let Err(err) = viewer.show() {
        warn!("Failed to show viewer window: {}", err);
        return;
    }
    if let Err(err) = app.hide() {
        warn!("Failed to hide main window: {}", err);
    }
}

/// Brings the main window back and hides the viewer.
fn leave_viewer_mode(app: &crate::AppWindow, viewer: &crate::ViewerWindow) {
    if let Err(err) = app.show() {
        warn!("Failed to show main window: {}", err);
    }
    if let Err(err) = viewer.hide() {
        warn!("Failed to hide viewer window: {}", err);
    }
}

/// The per-tick render callback handed to the playback timer.
fn tick_callback(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
) -> impl Fn(PathBuf) + 'static {
    let app = app.as_weak();
    let viewer = viewer.as_weak();
    let cache = state.image_cache.clone();
    move |path| image_display::show_image(app.clone(), viewer.clone(), path, cache.clone())
}

/// Adds folders (duplicates ignored), then refreshes, redraws, and persists.
pub(crate) fn add_folders(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
    paths: Vec<PathBuf>,
) {
    let mut added = false;
    {
        let mut slideshow = state.slideshow.lock().unwrap();
        for path in paths {
            added |= slideshow.add_folder(path);
        }
    }
    if !added {
        return;
    }

    refresh_folder_view(app, state);
    show_current(app, viewer, state);
    persist(app, viewer, state, playback);
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(
    app: &crate::AppWindow,
    viewer: &crate::ViewerWindow,
    state: &AppState,
    playback: &PlaybackService,
) {
    // Folder picker
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    app.global::<crate::Logic>().on_pick_folders({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move || {
            let app_weak = app_weak.clone();
            let viewer_weak = viewer_weak.clone();
            let state = state.clone();
            let playback = playback.clone();
            let _ = slint::spawn_local(async move {
                let Some(handles) = AsyncFileDialog::new().pick_folders().await else {
                    return;
                };
                let paths: Vec<PathBuf> =
                    handles.iter().map(|h| h.path().to_path_buf()).collect();

                let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade())
                else {
                    return;
                };
                add_folders(&app, &viewer, &state, &playback, paths);
            });
        }
    });

    app.global::<crate::Logic>().on_remove_folder({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |folder| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            state
                .slideshow
                .lock()
                .unwrap()
                .remove_folders(&[PathBuf::from(folder.as_str())]);

            refresh_folder_view(&app, &state);
            show_current(&app, &viewer, &state);
            persist(&app, &viewer, &state, &playback);
        }
    });

    app.global::<crate::Logic>().on_toggle_playback({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move || {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            let view_state = app.global::<crate::ViewState>();

            if playback.is_playing() {
                playback.stop();
                view_state.set_playing(false);
                leave_viewer_mode(&app, &viewer);
            } else {
                playback.start(tick_callback(&app, &viewer, &state));
                view_state.set_playing(true);
                if view_state.get_use_viewer_window() {
                    enter_viewer_mode(&app, &viewer);
                }
            }
            show_current(&app, &viewer, &state);
        }
    });

    app.global::<crate::Logic>().on_next_image({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        move || {
            let next = state.slideshow.lock().unwrap().advance();
            if let Some(path) = next {
                image_display::show_image(
                    app_weak.clone(),
                    viewer_weak.clone(),
                    path,
                    state.image_cache.clone(),
                );
            }
        }
    });

    app.global::<crate::Logic>().on_prev_image({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        move || {
            let prev = state.slideshow.lock().unwrap().retreat();
            if let Some(path) = prev {
                image_display::show_image(
                    app_weak.clone(),
                    viewer_weak.clone(),
                    path,
                    state.image_cache.clone(),
                );
            }
        }
    });

    app.global::<crate::Logic>().on_order_changed({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |label| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            let Some(order) = PlayOrder::from_label(label.as_str()) else {
                warn!("Unknown play order selected: {}", label);
                return;
            };
            playback.set_order(order, tick_callback(&app, &viewer, &state));
            persist(&app, &viewer, &state, &playback);
        }
    });

    app.global::<crate::Logic>().on_interval_changed({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |secs| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            playback.set_interval(secs.max(0) as u32, tick_callback(&app, &viewer, &state));
            app.global::<crate::ViewState>()
                .set_interval_secs(playback.interval_secs() as i32);
            persist(&app, &viewer, &state, &playback);
        }
    });

    app.global::<crate::Logic>().on_always_on_top_toggled({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |on_top| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            viewer.set_keep_on_top(on_top);
            persist(&app, &viewer, &state, &playback);
        }
    });

    app.global::<crate::Logic>().on_use_viewer_window_toggled({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |use_viewer| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            if playback.is_playing() {
                if use_viewer {
                    enter_viewer_mode(&app, &viewer);
                } else {
                    leave_viewer_mode(&app, &viewer);
                }
            }
            persist(&app, &viewer, &state, &playback);
        }
    });

    app.global::<crate::Logic>().on_include_subfolders_toggled({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move |include| {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            state
                .slideshow
                .lock()
                .unwrap()
                .set_include_subfolders(include);

            refresh_folder_view(&app, &state);
            show_current(&app, &viewer, &state);
            persist(&app, &viewer, &state, &playback);
        }
    });

    // Double-clicking the frameless viewer stops playback and brings the
    // main window back.
    viewer.on_dismissed({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move || {
            let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) else {
                return;
            };
            playback.stop();
            app.global::<crate::ViewState>().set_playing(false);
            leave_viewer_mode(&app, &viewer);
            show_current(&app, &viewer, &state);
        }
    });

    // Final snapshot on main-window close.
    app.window().on_close_requested({
        let app_weak = app.as_weak();
        let viewer_weak = viewer.as_weak();
        let state = state.clone();
        let playback = playback.clone();
        move || {
            if let (Some(app), Some(viewer)) = (app_weak.upgrade(), viewer_weak.upgrade()) {
                persist(&app, &viewer, &state, &playback);
                if let Err(err) = viewer.hide() {
                    warn!("Failed to hide viewer window: {}", err);
                }
            }
            slint::CloseRequestResponse::HideWindow
        }
    });
}
