//! Blocking image decode helpers.
//!
//! Decoding runs on a rayon worker; only the cheap `slint::Image` wrapping
//! happens on the UI thread.

use crate::error::{AppError, Result};
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image file into raw RGB8 data plus dimensions.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let decoded = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    Ok((rgb.into_raw(), width, height))
}

/// Wraps raw RGB8 data in a `slint::Image`.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgb8(buffer)
}
