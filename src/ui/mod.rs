//! UI module for handling user interactions and display updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async UI work that must stay on the main thread
//!   (the folder picker dialog)
//! - `rayon::spawn`: CPU-heavy image decoding off the UI thread
//! - `slint::invoke_from_event_loop`: returning decode results to the UI thread

pub mod handlers;
pub mod image_display;

pub use handlers::setup_handlers;
