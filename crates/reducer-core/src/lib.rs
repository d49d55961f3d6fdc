//! Reducer Core - Image reduction library
//!
//! This crate shrinks JPEG and PNG images to fit a bounding box while
//! preserving aspect ratio, re-encoding them in their original format.
//!
//! # Module Structure
//!
//! - `format` - Magic-byte sniffing into [`ImageFormat`]
//! - `decode` - JPEG / PNG decoding into a [`Raster`], plus thumbnail resampling
//! - `encode` - Raster encoding back to JPEG / PNG
//! - `params` - Parsing of the `maxWidth` / `maxHeight` bounds
//! - `backend` - The [`ImageBackend`] seam between orchestration and codecs
//! - `pipeline` - [`reduce`]: sniff, decode, resample, encode
//!
//! Every call is independent: there is no shared state, cache or background
//! work, so the pipeline can run concurrently from any number of threads.

pub mod backend;
pub mod decode;
pub mod encode;
pub mod format;
pub mod params;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use backend::{ImageBackend, ImageCrateBackend};
pub use decode::{DecodeError, FilterType, PixelLayout, Raster};
pub use encode::EncodeError;
pub use format::{sniff, ImageFormat};
pub use params::{ParamError, ReduceParams};
pub use pipeline::{reduce, reduce_with, ReduceError, Reduction};
