//! State management for the slideshow application.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::image_cache::ImageCache;
use crate::settings::SettingsStore;
use std::sync::{Arc, Mutex};

pub mod catalog;
pub mod folders;
pub mod slideshow;

pub use catalog::{ImageCatalog, PlayOrder};
pub use folders::FolderSet;
pub use slideshow::SlideshowState;

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub slideshow: Arc<Mutex<SlideshowState>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Timer driving slideshow playback.
    pub playback_timer: Arc<Mutex<Option<slint::Timer>>>,
    pub settings_store: Arc<SettingsStore>,
}

impl AppState {
    pub fn new(settings_store: SettingsStore) -> Self {
        Self {
            slideshow: Arc::new(Mutex::new(SlideshowState::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
            playback_timer: Arc::new(Mutex::new(None)),
            settings_store: Arc::new(settings_store),
        }
    }
}
