//! Core types for image decoding.

use image::DynamicImage;
use thiserror::Error;

use super::ContainerFormat;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input stream contained no bytes at all.
    #[error("Empty input: no image data received")]
    Empty,

    /// The leading bytes do not match any supported container format.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The container was recognised but its contents could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Parse a raw EXIF orientation code, returning `None` outside 1-8.
    pub fn from_exif(value: u32) -> Option<Self> {
        match value {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90CW),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270CW),
            _ => None,
        }
    }

    /// The raw EXIF code for this orientation.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true if this orientation swaps width and height dimensions.
    ///
    /// Rotations of 90° and 270° (and their flip variants Transpose/Transverse)
    /// swap the image dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        Orientation::from_exif(value).unwrap_or_default()
    }
}

/// A decoded image as it came out of its container.
///
/// Pixels keep their native layout (grayscale, RGBA, 16-bit, ...) until the
/// color normalizer runs, and `orientation` still holds whatever the EXIF
/// block said. `None` means the file carried no orientation tag.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Decoded pixel data in the container's native layout.
    pub image: DynamicImage,
    /// Container the pixels were decoded from.
    pub format: ContainerFormat,
    /// EXIF orientation, if the file carried one.
    pub orientation: Option<Orientation>,
}

impl DecodedImage {
    /// Create a new DecodedImage.
    pub fn new(
        image: DynamicImage,
        format: ContainerFormat,
        orientation: Option<Orientation>,
    ) -> Self {
        Self {
            image,
            format,
            orientation,
        }
    }

    /// Image width in pixels, as currently stored.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels, as currently stored.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Width and height as a tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Get the effective dimensions once orientation has been applied.
    pub fn oriented_dimensions(&self) -> (u32, u32) {
        match self.orientation {
            Some(o) if o.swaps_dimensions() => (self.height(), self.width()),
            _ => self.dimensions(),
        }
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
