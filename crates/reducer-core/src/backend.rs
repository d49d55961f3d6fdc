//! Codec backend trait.
//!
//! The [`ImageBackend`] trait defines the three capabilities the reduction
//! pipeline needs: decode, resample and encode. The pipeline only talks to
//! this trait, so the codec library can be replaced without touching the
//! orchestration in [`pipeline`](crate::pipeline).
//!
//! The production implementation is [`ImageCrateBackend`], built on the
//! `image` crate.

use crate::decode::{self, DecodeError, Raster};
use crate::encode::{self, EncodeError};
use crate::format::ImageFormat;

/// Trait for codec backends.
///
/// Implementations must be stateless across calls: every method is a pure
/// function of its arguments.
pub trait ImageBackend: Sync {
    /// Decode bytes of a known format.
    fn decode(&self, bytes: &[u8], format: ImageFormat) -> Result<Raster, DecodeError>;

    /// Shrink a raster to fit within the bounds, preserving aspect ratio.
    fn resample(&self, raster: Raster, max_width: u32, max_height: u32) -> Raster;

    /// Encode a raster in the given format.
    fn encode(&self, raster: &Raster, format: ImageFormat) -> Result<Vec<u8>, EncodeError>;
}

/// Backend using the `image` crate's codecs and Lanczos3 resampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateBackend;

impl ImageBackend for ImageCrateBackend {
    fn decode(&self, bytes: &[u8], format: ImageFormat) -> Result<Raster, DecodeError> {
        decode::decode(bytes, format)
    }

    fn resample(&self, raster: Raster, max_width: u32, max_height: u32) -> Raster {
        let (width, height) =
            decode::fit_dimensions(raster.width, raster.height, max_width, max_height);
        if raster.dimensions() == (width, height) {
            return raster;
        }
        decode::thumbnail(&raster, max_width, max_height)
    }

    fn encode(&self, raster: &Raster, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
        encode::encode(raster, format)
    }
}
