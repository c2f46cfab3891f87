//! Image loading and display logic.
//!
//! Decodes on a rayon worker, then hops back to the UI thread with
//! `slint::invoke_from_event_loop` to update both windows.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use log::error;
use slint::ComponentHandle;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const IDLE_TITLE: &str = "Slide Album";

fn title_for(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("{} - {}", IDLE_TITLE, name.to_string_lossy()),
        None => IDLE_TITLE.to_string(),
    }
}

/// Pushes a decoded image and its title to the main and viewer windows.
fn apply_image(
    app: &crate::AppWindow,
    viewer: slint::Weak<crate::ViewerWindow>,
    image: slint::Image,
    path: &Path,
) {
    let title = title_for(path);
    let view_state = app.global::<crate::ViewState>();
    view_state.set_current_image(image.clone());
    view_state.set_window_title(title.as_str().into());
    view_state.set_error_message("".into());

    if let Some(viewer) = viewer.upgrade() {
        viewer.set_current_image(image);
        viewer.set_window_title(title.as_str().into());
    }
}

/// Displays the image at `path`, serving from the cache when possible.
///
/// On a cache miss the decode runs on a rayon thread; a decode failure is
/// logged and surfaced as an error message, never a crash.
pub fn show_image(
    app: slint::Weak<crate::AppWindow>,
    viewer: slint::Weak<crate::ViewerWindow>,
    path: PathBuf,
    cache: Arc<Mutex<ImageCache>>,
) {
    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));

    if let Some(cached_image) = cached {
        if let Some(app) = app.upgrade() {
            let image = image_loader::create_slint_image(
                cached_image.data,
                cached_image.width,
                cached_image.height,
            );
            apply_image(&app, viewer, image, &path);
        }
        return;
    }

    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(app) = app.upgrade() else {
                return;
            };
            match result {
                Ok((data, width, height)) => {
                    if let Ok(mut cache) = cache.lock() {
                        cache.put(path.clone(), CachedImage::new(data.clone(), width, height));
                    }
                    let image = image_loader::create_slint_image(data, width, height);
                    apply_image(&app, viewer, image, &path);
                }
                Err(err) => {
                    let message = format!("Failed to load {}: {}", path.display(), err);
                    error!("{}", message);
                    app.global::<crate::ViewState>()
                        .set_error_message(message.into());
                }
            }
        });
    });
}

/// Resets both windows to the idle state (no current image).
pub fn clear_image(app: &crate::AppWindow, viewer: &crate::ViewerWindow) {
    let view_state = app.global::<crate::ViewState>();
    view_state.set_current_image(slint::Image::default());
    view_state.set_window_title(IDLE_TITLE.into());
    viewer.set_current_image(slint::Image::default());
    viewer.set_window_title(IDLE_TITLE.into());
}
