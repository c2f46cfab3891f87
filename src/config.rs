//! Application configuration constants.

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Slideshow interval bounds, in whole seconds.
pub const MIN_INTERVAL_SECS: u32 = 1;
pub const MAX_INTERVAL_SECS: u32 = 60;

/// Slideshow interval used when no setting is stored.
pub const DEFAULT_INTERVAL_SECS: u32 = 5;

/// Fallback geometry for the detached viewer window.
pub const DEFAULT_VIEWER_POSITION: (i32, i32) = (100, 100);
pub const DEFAULT_VIEWER_SIZE: (u32, u32) = (800, 600);

/// Number of decoded images kept in the LRU cache.
pub const IMAGE_CACHE_CAPACITY: usize = 10;
