//! Image encoding back to the source format.
//!
//! This module provides functionality for:
//! - Encoding RGB and grayscale rasters to JPEG at a configurable quality
//! - Encoding gray / RGB / RGBA rasters to PNG with default lossless compression
//! - Dispatching a [`Raster`] to the encoder for a detected [`ImageFormat`]
//!
//! The pipeline never transcodes: [`encode`] is always called with the format
//! the input was sniffed as.
//!
//! # Examples
//!
//! ```ignore
//! use reducer_core::decode::Raster;
//! use reducer_core::encode::encode;
//! use reducer_core::format::ImageFormat;
//!
//! let raster = Raster::filled_rgb(100, 100, [128, 128, 128]);
//! let png = encode(&raster, ImageFormat::Png).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::decode::{PixelLayout, Raster};
use crate::format::ImageFormat;

pub use jpeg::{encode_jpeg, encode_jpeg_gray, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// No encoder is configured for the format
    #[error("No encoder for format: {0}")]
    UnsupportedFormat(ImageFormat),

    /// The underlying codec failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },
}

/// Encode a raster in the given format.
///
/// JPEG uses [`DEFAULT_JPEG_QUALITY`], keeps grayscale as a single channel
/// and drops any alpha channel; PNG keeps the raster's layout.
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedFormat` for [`ImageFormat::Unknown`], or
/// the underlying encoder's error.
pub fn encode(raster: &Raster, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ImageFormat::Jpeg => match raster.layout {
            PixelLayout::Luma8 => encode_jpeg_gray(
                &raster.pixels,
                raster.width,
                raster.height,
                DEFAULT_JPEG_QUALITY,
            ),
            PixelLayout::Rgb8 => encode_jpeg(
                &raster.pixels,
                raster.width,
                raster.height,
                DEFAULT_JPEG_QUALITY,
            ),
            PixelLayout::Rgba8 => {
                let rgb = raster.clone().into_rgb();
                encode_jpeg(&rgb.pixels, rgb.width, rgb.height, DEFAULT_JPEG_QUALITY)
            }
        },
        ImageFormat::Png => encode_png(&raster.pixels, raster.width, raster.height, raster.layout),
        ImageFormat::Unknown => Err(EncodeError::UnsupportedFormat(format)),
    }
}

/// Check dimensions and buffer length before handing pixels to a codec.
fn validate(pixels: &[u8], width: u32, height: u32, channels: usize) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * channels;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
