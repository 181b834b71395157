//! Image decoding for photogate.
//!
//! This module provides functionality for:
//! - Identifying the container format from its magic bytes
//! - Decoding any supported container into a common `DecodedImage`
//! - Reading the EXIF orientation tag so it can be applied later
//!
//! # Supported containers
//!
//! JPEG, PNG, GIF, WebP, BMP and TIFF. The set is closed: anything else is
//! rejected with `DecodeError::UnsupportedFormat` before a decoder is chosen.
//!
//! Decoding never rotates pixels. Orientation is recorded on the
//! `DecodedImage` and applied by [`crate::normalize::normalize_orientation`].

mod format;
mod metadata;
mod reader;
mod types;

pub use format::ContainerFormat;
pub use metadata::read_orientation;
pub use reader::decode;
pub use types::{DecodeError, DecodedImage, Orientation};

#[cfg(test)]
pub(crate) use metadata::test_support;
