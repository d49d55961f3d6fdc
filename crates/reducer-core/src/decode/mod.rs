//! Image decoding and resampling.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG bytes into an in-memory [`Raster`]
//! - Fitting a raster inside a bounding box (thumbnailing)
//!
//! Decoding dispatches on the [`ImageFormat`] the sniffer produced; the codec
//! never guesses the format from content on its own. Orientation metadata
//! and embedded previews are ignored.
//!
//! # Examples
//!
//! ```ignore
//! use reducer_core::decode::{decode, thumbnail};
//! use reducer_core::format::sniff;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let raster = decode(&bytes, sniff(&bytes)).unwrap();
//! let small = thumbnail(&raster, 300, 300);
//! println!("{}x{} -> {}x{}", raster.width, raster.height, small.width, small.height);
//! ```

mod jpeg;
mod png;
mod resize;
mod types;

use image::DynamicImage;

use crate::format::ImageFormat;

pub use jpeg::decode_jpeg;
pub use png::decode_png;
pub use resize::{fit_dimensions, resize_exact, thumbnail};
pub use types::{DecodeError, FilterType, PixelLayout, Raster};

/// Decode `bytes` as `format`.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` for [`ImageFormat::Unknown`] and
/// `DecodeError::Corrupted` when the bytes are not a valid instance of the
/// format.
pub fn decode(bytes: &[u8], format: ImageFormat) -> Result<Raster, DecodeError> {
    match format {
        ImageFormat::Jpeg => decode_jpeg(bytes),
        ImageFormat::Png => decode_png(bytes),
        ImageFormat::Unknown => Err(DecodeError::UnsupportedFormat(format)),
    }
}

/// Convert a decoded image into a raster, keeping alpha only when asked and
/// present. Grayscale sources without alpha stay single-channel.
fn raster_from_dynamic(img: DynamicImage, keep_alpha: bool) -> Result<Raster, DecodeError> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    let color = img.color();
    let raster = if keep_alpha && color.has_alpha() {
        Raster::from_rgba_image(img.into_rgba8())
    } else if !color.has_color() {
        Raster::from_luma_image(img.into_luma8())
    } else {
        Raster::from_rgb_image(img.into_rgb8())
    };
    Ok(raster)
}
