//! Core types for decoded rasters.

use image::{ImageBuffer, Luma, Rgb, Rgba};
use thiserror::Error;

use crate::format::ImageFormat;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The decoder was asked to handle a format it has no codec for.
    #[error("No decoder for format: {0}")]
    UnsupportedFormat(ImageFormat),

    /// The bytes are not a structurally valid image of the claimed format.
    #[error("Corrupted or incomplete image data: {0}")]
    Corrupted(String),

    /// The decoded image has a zero dimension.
    #[error("Decoded image has empty dimensions: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos windowed sinc with support radius 3 (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Sample layout of a [`Raster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// 1 byte per pixel, grayscale.
    Luma8,
    /// 3 bytes per pixel.
    Rgb8,
    /// 4 bytes per pixel, straight alpha.
    Rgba8,
}

impl PixelLayout {
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Luma8 => 1,
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// A decoded image held in memory for the duration of one reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    pub layout: PixelLayout,
    /// Row-major samples, `width * height * layout.channels()` bytes.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new Raster with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// A raster where every pixel has the same RGB value.
    pub fn filled_rgb(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::new(width, height, PixelLayout::Rgb8, pixels)
    }

    pub fn from_luma_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Luma8,
            pixels: img.into_raw(),
        }
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            pixels: img.into_raw(),
        }
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgba8,
            pixels: img.into_raw(),
        }
    }

    /// Borrow the samples as a grayscale image view.
    pub fn luma_view(&self) -> Option<ImageBuffer<Luma<u8>, &[u8]>> {
        if self.layout != PixelLayout::Luma8 {
            return None;
        }
        ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// Borrow the samples as an RGB image view. `None` if the layout or
    /// buffer length does not match.
    pub fn rgb_view(&self) -> Option<ImageBuffer<Rgb<u8>, &[u8]>> {
        if self.layout != PixelLayout::Rgb8 {
            return None;
        }
        ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// Borrow the samples as an RGBA image view.
    pub fn rgba_view(&self) -> Option<ImageBuffer<Rgba<u8>, &[u8]>> {
        if self.layout != PixelLayout::Rgba8 {
            return None;
        }
        ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }

    /// Convert to `Rgb8`, dropping alpha and replicating gray samples.
    pub fn into_rgb(self) -> Raster {
        match self.layout {
            PixelLayout::Rgb8 => self,
            PixelLayout::Luma8 => {
                let pixels = self.pixels.iter().flat_map(|&v| [v, v, v]).collect();
                Raster::new(self.width, self.height, PixelLayout::Rgb8, pixels)
            }
            PixelLayout::Rgba8 => {
                let pixels = self
                    .pixels
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                Raster::new(self.width, self.height, PixelLayout::Rgb8, pixels)
            }
        }
    }

    /// Expected buffer length for the current dimensions and layout.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.channels()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
