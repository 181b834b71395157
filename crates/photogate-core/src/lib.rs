//! Photogate Core - upload normalization library
//!
//! This crate turns an arbitrary uploaded photo into a predictable JPEG:
//! upright (EXIF orientation applied), at least 1080p on one axis, at most
//! 3840x2160, 8-bit RGB, quality 95.
//!
//! Each step is a public function so it can be tested on its own;
//! [`pipeline::run`] composes them in the required order.

pub mod decode;
pub mod encode;
pub mod normalize;
pub mod pipeline;

pub use decode::{ContainerFormat, DecodeError, DecodedImage, Orientation};
pub use encode::{EncodeError, JPEG_QUALITY};
pub use normalize::{ColorModel, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
pub use pipeline::{run, PipelineError, PipelineOutput};
