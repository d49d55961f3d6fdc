//! Thumbnail resampling.
//!
//! [`thumbnail`] shrinks a raster to fit a `max_width x max_height` box while
//! preserving its aspect ratio. It never enlarges: a raster that already fits
//! comes back with its original dimensions.
//!
//! Zero bounds are accepted. The affected axis collapses to a single pixel
//! instead of producing an empty image or an error.

use super::{FilterType, PixelLayout, Raster};

/// Compute the size of a raster fitted inside a bounding box.
///
/// The scale is `min(max_width / width, max_height / height)`, clamped to
/// `1.0`, and each side is rounded and floored at 1 pixel.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(fit_dimensions(1000, 500, 300, 300), (300, 150));
/// assert_eq!(fit_dimensions(100, 100, 500, 500), (100, 100));
/// ```
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let scale_x = max_width as f64 / width as f64;
    let scale_y = max_height as f64 / height as f64;
    let scale = scale_x.min(scale_y).min(1.0);

    let new_width = (width as f64 * scale).round() as u32;
    let new_height = (height as f64 * scale).round() as u32;

    (new_width.clamp(1, width), new_height.clamp(1, height))
}

/// Shrink a raster to fit within `max_width x max_height` using Lanczos3.
///
/// Returns a clone when no reduction is needed.
pub fn thumbnail(raster: &Raster, max_width: u32, max_height: u32) -> Raster {
    let (width, height) = fit_dimensions(raster.width, raster.height, max_width, max_height);

    if (width, height) == raster.dimensions() {
        return raster.clone();
    }

    // Dimensions come from fit_dimensions and are never zero, so the only
    // failure is a malformed buffer, which resampling leaves untouched.
    resize_exact(raster, width, height, FilterType::Lanczos3).unwrap_or_else(|| raster.clone())
}

/// Resize a raster to exact dimensions with the given filter.
///
/// Returns `None` if either target dimension is zero or the raster's pixel
/// buffer does not match its declared size.
pub fn resize_exact(
    raster: &Raster,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Option<Raster> {
    if width == 0 || height == 0 {
        return None;
    }

    if raster.dimensions() == (width, height) {
        return Some(raster.clone());
    }

    let filter = filter.to_image_filter();
    match raster.layout {
        PixelLayout::Luma8 => {
            let view = raster.luma_view()?;
            let resized = image::imageops::resize(&view, width, height, filter);
            Some(Raster::from_luma_image(resized))
        }
        PixelLayout::Rgb8 => {
            let view = raster.rgb_view()?;
            let resized = image::imageops::resize(&view, width, height, filter);
            Some(Raster::from_rgb_image(resized))
        }
        PixelLayout::Rgba8 => {
            let view = raster.rgba_view()?;
            let resized = image::imageops::resize(&view, width, height, filter);
            Some(Raster::from_rgba_image(resized))
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
