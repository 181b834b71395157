//! Post-encode check that the output really is a JPEG.

use crate::pipeline::PipelineError;

/// JPEG start-of-image marker.
pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// How many leading bytes to keep for the diagnostic.
const HEAD_LEN: usize = 4;

/// Confirm the encoded buffer begins with the JPEG SOI marker.
///
/// On failure the error carries up to the first four bytes of the buffer.
pub fn verify_jpeg(bytes: &[u8]) -> Result<(), PipelineError> {
    if bytes.starts_with(&JPEG_SOI) {
        return Ok(());
    }
    Err(PipelineError::EncodeVerificationFailed {
        head: bytes[..bytes.len().min(HEAD_LEN)].to_vec(),
    })
}
