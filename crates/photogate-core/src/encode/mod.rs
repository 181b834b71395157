//! JPEG encoding and output verification.
//!
//! Every image leaves the pipeline through [`encode_rgb`] at
//! [`JPEG_QUALITY`], then [`verify_jpeg`] checks the SOI marker before any
//! byte is handed to the caller.

mod jpeg;
mod verify;

pub use jpeg::{encode_jpeg, encode_rgb, EncodeError, JPEG_QUALITY};
pub use verify::{verify_jpeg, JPEG_SOI};
