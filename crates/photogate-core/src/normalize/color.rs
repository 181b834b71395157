//! Color model normalization to 8-bit RGB.

use image::{DynamicImage, RgbImage};
use tracing::debug;

/// Coarse classification of a decoded pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    /// Single luminance channel (8 or 16 bit).
    Grayscale,
    /// Luminance plus alpha.
    GrayscaleAlpha,
    /// Three 8-bit channels; the target layout.
    Rgb,
    /// Three 8-bit channels plus alpha.
    Rgba,
    /// Anything else: 16-bit or floating point color.
    Other,
}

impl ColorModel {
    /// Classify the pixel layout of an image.
    pub fn of(img: &DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => ColorModel::Grayscale,
            DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_) => {
                ColorModel::GrayscaleAlpha
            }
            DynamicImage::ImageRgb8(_) => ColorModel::Rgb,
            DynamicImage::ImageRgba8(_) => ColorModel::Rgba,
            _ => ColorModel::Other,
        }
    }

    /// Whether the layout carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorModel::GrayscaleAlpha | ColorModel::Rgba)
    }
}

/// Convert any pixel layout to 8-bit three-channel RGB.
///
/// Alpha is dropped without compositing against a background: a fully
/// transparent red pixel comes out as opaque red. Grayscale is replicated into
/// all three channels. An `Rgb8` buffer is moved out without copying.
pub fn to_rgb(img: DynamicImage) -> RgbImage {
    let model = ColorModel::of(&img);
    if model != ColorModel::Rgb {
        debug!(
            from = ?img.color(),
            alpha_dropped = model.has_alpha(),
            "converting to RGB8"
        );
    }
    img.into_rgb8()
}
