//! The reduction pipeline: sniff, decode, resample, encode.
//!
//! Each step can fail with a distinct [`ReduceError`] variant. Nothing is
//! retried and no partial output escapes: callers get either the complete
//! re-encoded image or an error.
//!
//! The output format is always the sniffed input format.

use thiserror::Error;
use tracing::debug;

use crate::backend::{ImageBackend, ImageCrateBackend};
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::format::{sniff, ImageFormat};
use crate::params::ReduceParams;

/// Errors surfaced by [`reduce`].
#[derive(Debug, Error)]
pub enum ReduceError {
    /// The bytes carry no JPEG or PNG signature.
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The detected format has no encoder.
    #[error("no encoder for format: {0}")]
    UnsupportedFormat(ImageFormat),

    #[error("encode failed: {0}")]
    Encode(EncodeError),
}

impl From<EncodeError> for ReduceError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::UnsupportedFormat(format) => ReduceError::UnsupportedFormat(format),
            other => ReduceError::Encode(other),
        }
    }
}

/// A successfully reduced image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Format of `bytes`; always the input format.
    pub format: ImageFormat,
    /// Width of the encoded image in pixels.
    pub width: u32,
    /// Height of the encoded image in pixels.
    pub height: u32,
}

impl Reduction {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Reduce an image with the default `image`-crate backend.
pub fn reduce(bytes: &[u8], params: ReduceParams) -> Result<Reduction, ReduceError> {
    reduce_with(&ImageCrateBackend, bytes, params)
}

/// Reduce an image with the given backend.
///
/// # Errors
///
/// - `UnrecognizedFormat` if the sniffer finds no known signature
/// - `Decode` if the bytes are not a valid image of the sniffed format
/// - `UnsupportedFormat` if the backend has no encoder for the format
/// - `Encode` if the encoder fails
pub fn reduce_with<B: ImageBackend + ?Sized>(
    backend: &B,
    bytes: &[u8],
    params: ReduceParams,
) -> Result<Reduction, ReduceError> {
    let format = match sniff(bytes) {
        ImageFormat::Unknown => return Err(ReduceError::UnrecognizedFormat),
        format @ (ImageFormat::Jpeg | ImageFormat::Png) => format,
    };
    debug!(%format, len = bytes.len(), "sniffed input");

    let raster = backend.decode(bytes, format)?;
    let (orig_width, orig_height) = raster.dimensions();
    debug!(width = orig_width, height = orig_height, "decoded");

    let raster = backend.resample(raster, params.max_width, params.max_height);
    debug!(
        width = raster.width,
        height = raster.height,
        max_width = params.max_width,
        max_height = params.max_height,
        "resampled"
    );

    let encoded = backend.encode(&raster, format)?;
    debug!(%format, len = encoded.len(), "encoded");

    Ok(Reduction {
        bytes: encoded,
        format,
        width: raster.width,
        height: raster.height,
    })
}
