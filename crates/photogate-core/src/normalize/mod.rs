//! Normalization steps applied between decode and encode.
//!
//! The pipeline runs them in this order:
//! 1. Orientation (EXIF rotate/flip, may swap width and height)
//! 2. Resolution gate (reject below 1080p on both axes)
//! 3. Downscale (fit within 3840x2160, Lanczos3)
//! 4. Color (any layout to 8-bit RGB, alpha dropped)
//!
//! Orientation must come first: every size decision is made on the upright
//! dimensions.

mod color;
mod downscale;
mod orientation;
mod resolution;

pub use color::{to_rgb, ColorModel};
pub use downscale::{downscale, fit_within, needs_downscale, MAX_HEIGHT, MAX_WIDTH};
pub use orientation::{apply_orientation, normalize_orientation};
pub use resolution::{check_resolution, is_below_minimum, MIN_HEIGHT, MIN_WIDTH};
