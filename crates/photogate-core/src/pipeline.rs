//! The end-to-end normalization pipeline.
//!
//! `run` takes the raw bytes of an uploaded photo and either returns an
//! upright, UHD-bounded, RGB JPEG or fails with one of the terminal errors
//! below. Steps run strictly in order and nothing is retried.

use thiserror::Error;
use tracing::{debug, debug_span};

use crate::decode::{decode, ContainerFormat, DecodeError};
use crate::encode::{encode_rgb, verify_jpeg, EncodeError};
use crate::normalize::{check_resolution, downscale, normalize_orientation, to_rgb};

/// Terminal failure states of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input could not be decoded.
    #[error("DECODE_FAILED: {0}")]
    Decode(#[from] DecodeError),

    /// The upright image is below 1080p on both axes.
    ///
    /// Displays as the bare token, which downstream callers match on.
    #[error("RESOLUTION_TOO_LOW")]
    ResolutionTooLow { width: u32, height: u32 },

    /// The JPEG encoder rejected the frame.
    #[error("ENCODE_FAILED: {0}")]
    Encode(#[from] EncodeError),

    /// The encoder produced something that does not start with the SOI marker.
    #[error("ENCODE_VERIFICATION_FAILED: output is not JPEG (first bytes: {})", hex_bytes(.head))]
    EncodeVerificationFailed { head: Vec<u8> },
}

impl PipelineError {
    /// Process exit status for this failure.
    ///
    /// `1` covers decode and encoder failures, `2` is the resolution gate,
    /// `3` is output verification.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Decode(_) | PipelineError::Encode(_) => 1,
            PipelineError::ResolutionTooLow { .. } => 2,
            PipelineError::EncodeVerificationFailed { .. } => 3,
        }
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "<empty>".to_string();
    }
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A successfully normalized JPEG.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Encoded JPEG bytes, guaranteed to start with `FF D8`.
    pub jpeg: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Container the input was decoded from.
    pub source_format: ContainerFormat,
    /// Whether the downscale step shrank the image.
    pub downscaled: bool,
}

/// Decode, validate and normalize `input`, returning a verified JPEG.
///
/// # Errors
///
/// Returns the first failing step's error; see [`PipelineError`].
pub fn run(input: &[u8]) -> Result<PipelineOutput, PipelineError> {
    let _span = debug_span!("pipeline", input_len = input.len()).entered();

    let decoded = decode(input)?;
    let source_format = decoded.format;

    let upright = normalize_orientation(decoded);
    let (width, height) = upright.dimensions();
    check_resolution(width, height)?;

    let scaled = downscale(upright.image);
    let downscaled = (scaled.width(), scaled.height()) != (width, height);

    let rgb = to_rgb(scaled);
    let jpeg = encode_rgb(&rgb)?;
    verify_jpeg(&jpeg)?;

    debug!(
        width = rgb.width(),
        height = rgb.height(),
        downscaled,
        len = jpeg.len(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        jpeg,
        width: rgb.width(),
        height: rgb.height(),
        source_format,
        downscaled,
    })
}
