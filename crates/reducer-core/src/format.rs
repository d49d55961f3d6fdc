//! Image format detection from magic bytes.
//!
//! Only the first four bytes are examined:
//!
//! | Prefix | Format |
//! |---|---|
//! | `FF D8` | JPEG |
//! | `89 50 4E 47` | PNG |
//! | anything else | Unknown |
//!
//! Buffers shorter than four bytes are always `Unknown`, even if they begin
//! with a JPEG marker.

use std::fmt;

/// Minimum number of bytes needed before any signature is checked.
const SNIFF_LEN: usize = 4;

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];
const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Image formats the pipeline can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// JPEG (SOI marker `FF D8`).
    Jpeg,
    /// PNG (`89 50 4E 47` signature).
    Png,
    /// No known signature matched.
    Unknown,
}

impl ImageFormat {
    /// MIME type to send with bytes of this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }

    /// Short lower-case name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a byte buffer by its leading signature.
///
/// Total over all inputs: never panics, and every buffer maps to exactly one
/// [`ImageFormat`].
pub fn sniff(bytes: &[u8]) -> ImageFormat {
    if bytes.len() < SNIFF_LEN {
        return ImageFormat::Unknown;
    }

    if bytes.starts_with(&JPEG_MAGIC) {
        ImageFormat::Jpeg
    } else if bytes.starts_with(&PNG_MAGIC) {
        ImageFormat::Png
    } else {
        ImageFormat::Unknown
    }
}
