//! Service layer coordinating state, timers, and the filesystem.

pub mod playback_service;

pub use playback_service::PlaybackService;
