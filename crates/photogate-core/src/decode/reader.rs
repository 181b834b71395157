//! Format-dispatched decoding into a common in-memory image.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use super::metadata::read_orientation;
use super::{ContainerFormat, DecodeError, DecodedImage};

/// Decode an image from bytes, keeping its native pixel layout and any EXIF
/// orientation for the normalizer to apply.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes in any supported container
///
/// # Errors
///
/// Returns `DecodeError::Empty` for empty input.
/// Returns `DecodeError::UnsupportedFormat` if the magic bytes match no supported container.
/// Returns `DecodeError::Corrupted` if the container is recognised but cannot be decoded.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let format = ContainerFormat::sniff(bytes).ok_or(DecodeError::UnsupportedFormat)?;

    let orientation = if format.may_carry_exif() {
        read_orientation(bytes)
    } else {
        None
    };

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let decoded = DecodedImage::new(img, format, orientation);
    if decoded.is_empty() {
        return Err(DecodeError::Corrupted(format!(
            "{format} image has zero-sized dimensions"
        )));
    }

    debug!(
        %format,
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.image.color(),
        orientation = ?decoded.orientation,
        "decoded input"
    );

    Ok(decoded)
}
