//! PNG decoding.

use super::{raster_from_dynamic, DecodeError, Raster};

/// Decode PNG bytes into a raster.
///
/// Sources with an alpha channel (including tRNS transparency) become
/// `Rgba8`, grayscale sources without alpha become `Luma8`, and everything
/// else becomes `Rgb8`. 16-bit samples are reduced to 8 bits.
///
/// # Errors
///
/// Returns `DecodeError::Corrupted` if the bytes are not a valid PNG.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    raster_from_dynamic(img, true)
}
