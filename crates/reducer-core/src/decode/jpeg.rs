//! JPEG decoding.
//!
//! EXIF orientation is deliberately not applied: pixels come out in stored
//! order, whatever the camera recorded in the metadata.

use super::{raster_from_dynamic, DecodeError, Raster};

/// Decode JPEG bytes into a raster.
///
/// Grayscale sources become `Luma8`; color and CMYK sources become `Rgb8`.
///
/// # Errors
///
/// Returns `DecodeError::Corrupted` if the bytes are not a valid JPEG stream.
pub fn decode_jpeg(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Jpeg)
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    raster_from_dynamic(img, false)
}
