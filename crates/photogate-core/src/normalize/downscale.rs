//! Aspect-preserving downscale to fit within a 4K (UHD) frame.
//!
//! Images larger than 3840x2160 on either axis are shrunk with a single
//! uniform scale factor, so the aspect ratio is preserved by construction.
//! Smaller images pass through without being touched.

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Width of a UHD frame.
pub const MAX_WIDTH: u32 = 3840;
/// Height of a UHD frame.
pub const MAX_HEIGHT: u32 = 2160;

/// Slack for `max / n * n` landing a hair under an integer in f64.
const FLOOR_EPSILON: f64 = 1e-9;

/// True when either axis exceeds its UHD cap.
#[inline]
pub fn needs_downscale(width: u32, height: u32) -> bool {
    width > MAX_WIDTH || height > MAX_HEIGHT
}

/// Calculate dimensions that fit within `max_width` x `max_height` while
/// preserving aspect ratio.
///
/// Uses `scale = min(max_width / width, max_height / height)` and floors each
/// scaled axis. Images that already fit are returned unchanged; this never
/// upscales. A zero-sized image or a zero-sized box yields `(0, 0)`.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    (
        floor_scaled(width, scale).clamp(1, max_width),
        floor_scaled(height, scale).clamp(1, max_height),
    )
}

fn floor_scaled(value: u32, scale: f64) -> u32 {
    (value as f64 * scale + FLOOR_EPSILON).floor() as u32
}

/// Shrink an image to fit within 3840x2160 using Lanczos3 resampling.
///
/// Returns the input unchanged when neither axis exceeds its cap.
pub fn downscale(img: DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if !needs_downscale(width, height) {
        return img;
    }

    let (new_width, new_height) = fit_within(width, height, MAX_WIDTH, MAX_HEIGHT);
    debug!(
        from = ?(width, height),
        to = ?(new_width, new_height),
        "downscaling to fit UHD"
    );

    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        // Simple gradient so the resampler has something to chew on
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
            ])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_needs_downscale() {
        assert!(!needs_downscale(3840, 2160));
        assert!(needs_downscale(3841, 2160));
        assert!(needs_downscale(3840, 2161));
        assert!(!needs_downscale(1920, 1080));
        // Portrait UHD is taller than the cap
        assert!(needs_downscale(2160, 3840));
    }

    #[test]
    fn test_fit_within_4000x3000() {
        // scale = min(0.96, 0.72) = 0.72
        assert_eq!(fit_within(4000, 3000, MAX_WIDTH, MAX_HEIGHT), (2880, 2160));
    }

    #[test]
    fn test_fit_within_width_bound() {
        // scale = min(3840/7680, 2160/2000) = 0.5
        assert_eq!(fit_within(7680, 2000, MAX_WIDTH, MAX_HEIGHT), (3840, 1000));
    }

    #[test]
    fn test_fit_within_portrait() {
        // scale = min(3840/3024, 2160/4032) = 0.5357...
        assert_eq!(fit_within(3024, 4032, MAX_WIDTH, MAX_HEIGHT), (1620, 2160));
    }

    #[test]
    fn test_fit_within_already_fits() {
        assert_eq!(fit_within(1920, 1080, MAX_WIDTH, MAX_HEIGHT), (1920, 1080));
        assert_eq!(fit_within(3840, 2160, MAX_WIDTH, MAX_HEIGHT), (3840, 2160));
    }

    #[test]
    fn test_fit_within_zero_input() {
        assert_eq!(fit_within(0, 0, MAX_WIDTH, MAX_HEIGHT), (0, 0));
    }

    #[test]
    fn test_fit_within_zero_box() {
        assert_eq!(fit_within(5000, 5000, 0, 0), (0, 0));
        assert_eq!(fit_within(5000, 5000, 0, MAX_HEIGHT), (0, 0));
        assert_eq!(fit_within(5000, 5000, MAX_WIDTH, 0), (0, 0));
    }

    #[test]
    fn test_fit_within_extreme_aspect_keeps_one_pixel() {
        let (w, h) = fit_within(100_000, 1, MAX_WIDTH, MAX_HEIGHT);
        assert_eq!((w, h), (3840, 1));
    }

    #[test]
    fn test_downscale_passthrough() {
        let img = create_test_image(64, 32);
        let out = downscale(img);
        assert_eq!((out.width(), out.height()), (64, 32));
    }

    #[test]
    fn test_downscale_wide_image() {
        let img = create_test_image(3900, 1000);
        let out = downscale(img);
        // scale = 3840/3900; 1000 * 0.98461... = 984.6
        assert_eq!((out.width(), out.height()), (3840, 984));
    }

    #[test]
    fn test_downscale_keeps_color_layout() {
        let img = DynamicImage::new_rgba8(3842, 10);
        let out = downscale(img);
        assert_eq!(out.color(), image::ColorType::Rgba8);
        assert_eq!(out.width(), 3840);
    }
}
