//! Minimum-resolution gate.

use crate::pipeline::PipelineError;

/// Width of a 1080p frame.
pub const MIN_WIDTH: u32 = 1920;
/// Height of a 1080p frame.
pub const MIN_HEIGHT: u32 = 1080;

/// True when an image is too small on both axes.
///
/// Meeting either threshold is enough to pass: a 1000x1500 portrait shot is
/// accepted because its height clears 1080.
#[inline]
pub fn is_below_minimum(width: u32, height: u32) -> bool {
    width < MIN_WIDTH && height < MIN_HEIGHT
}

/// Reject images whose upright dimensions fall below 1080p on both axes.
///
/// Must be called after orientation has been applied.
pub fn check_resolution(width: u32, height: u32) -> Result<(), PipelineError> {
    if is_below_minimum(width, height) {
        return Err(PipelineError::ResolutionTooLow { width, height });
    }
    Ok(())
}
