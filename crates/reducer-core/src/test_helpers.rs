//! Shared test fixtures.
//!
//! Rasters are synthesized and encoded on the fly so no binary fixtures need
//! to live in the repository.

use crate::decode::{PixelLayout, Raster};
use crate::encode::{encode_jpeg, encode_jpeg_gray, encode_png, DEFAULT_JPEG_QUALITY};

/// An RGB raster with a horizontal red / vertical green gradient.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8); // R
            pixels.push(((y * 255) / height.max(1)) as u8); // G
            pixels.push(128); // B
        }
    }
    Raster::from_rgb_image(
        image::RgbImage::from_raw(width, height, pixels).expect("gradient buffer size"),
    )
}

/// A single-channel raster with a horizontal gradient.
pub fn gray_raster(width: u32, height: u32) -> Raster {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _ in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / width.max(1)) as u8);
        }
    }
    Raster::new(width, height, PixelLayout::Luma8, pixels)
}

/// Encode a raster as JPEG at the default quality. Grayscale stays grayscale.
pub fn jpeg_bytes(raster: &Raster) -> Vec<u8> {
    if raster.layout == PixelLayout::Luma8 {
        return encode_jpeg_gray(
            &raster.pixels,
            raster.width,
            raster.height,
            DEFAULT_JPEG_QUALITY,
        )
        .expect("encode gray jpeg");
    }
    let rgb = raster.clone().into_rgb();
    encode_jpeg(&rgb.pixels, rgb.width, rgb.height, DEFAULT_JPEG_QUALITY).expect("encode jpeg")
}

/// Encode a raster as PNG, keeping its layout.
pub fn png_bytes(raster: &Raster) -> Vec<u8> {
    encode_png(&raster.pixels, raster.width, raster.height, raster.layout).expect("encode png")
}
