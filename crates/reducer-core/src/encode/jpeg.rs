//! JPEG encoding.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! Reduced images are written at [`DEFAULT_JPEG_QUALITY`] unless a caller
//! asks for something else.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate, EncodeError};
use crate::format::ImageFormat;

/// Quality used when re-encoding reduced JPEGs.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```ignore
/// use reducer_core::encode::encode_jpeg;
///
/// let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
/// let jpeg = encode_jpeg(&pixels, 100, 100, 75).unwrap();
///
/// // Verify JPEG magic bytes
/// assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
/// ```
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 3)?;
    write_jpeg(pixels, width, height, ExtendedColorType::Rgb8, quality)
}

/// Encode 8-bit grayscale pixel data (1 byte per pixel) to JPEG bytes.
pub fn encode_jpeg_gray(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height, 1)?;
    write_jpeg(pixels, width, height, ExtendedColorType::L8, quality)
}

fn write_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(pixels, width, height, color)
        .map_err(|e| EncodeError::EncodingFailed {
            format: ImageFormat::Jpeg,
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Valid input always produces a framed JPEG stream.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in (1u32..=50, 1u32..=50),
            quality in 1u8..=100,
        ) {
            let pixels = vec![128u8; (width as usize) * (height as usize) * 3];

            let jpeg_bytes = encode_jpeg(&pixels, width, height, quality).unwrap();
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4);
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Same input always produces same output.
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=20, 1u32..=20)) {
            let pixels = vec![100u8; (width as usize) * (height as usize) * 3];

            let first = encode_jpeg(&pixels, width, height, DEFAULT_JPEG_QUALITY).unwrap();
            let second = encode_jpeg(&pixels, width, height, DEFAULT_JPEG_QUALITY).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
