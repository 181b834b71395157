//! JPEG encoding of normalized RGB frames.
//!
//! Uses `jpeg-encoder` with optimized Huffman tables: each image gets tables
//! built from its own symbol statistics instead of the generic Annex K ones.
//! The encoder writes only a JFIF header and the scan data, so nothing from
//! the input file (EXIF, ICC, XMP) survives into the output.

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use thiserror::Error;
use tracing::debug;

/// Quality used for every output JPEG.
pub const JPEG_QUALITY: u8 = 95;

/// Largest width or height a baseline JPEG frame header can hold.
const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Width or height does not fit the 16-bit JPEG frame header
    #[error("Dimensions {width}x{height} exceed the JPEG limit of 65535")]
    TooLarge { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes with optimized Huffman tables.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    encode_with(pixels, width, height, quality, true)
}

/// Encode a normalized frame at the fixed output quality.
pub fn encode_rgb(img: &RgbImage) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(img.as_raw(), img.width(), img.height(), JPEG_QUALITY)
}

fn encode_with(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
    optimize: bool,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(EncodeError::TooLarge { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Vec::with_capacity(expected_len / 8);
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_optimized_huffman_tables(optimize);
    encoder
        .encode(pixels, width as u16, height as u16, ColorType::Rgb)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    debug!(width, height, quality, optimize, len = buffer.len(), "encoded JPEG");
    Ok(buffer)
}
