//! Byte-stream plumbing around the core pipeline.

use std::io::{self, Read, Write};

use photogate_core::{PipelineError, PipelineOutput};
use thiserror::Error;
use tracing::info;

/// Everything that can end a filter run unsuccessfully.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("IO_ERROR: failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("IO_ERROR: failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl FilterError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            FilterError::Read(_) | FilterError::Write(_) => 1,
            FilterError::Pipeline(e) => e.exit_code(),
        }
    }
}

/// Read all of `input`, run the pipeline, and write the JPEG to `output`.
///
/// Nothing is written to `output` unless the pipeline succeeds, and the
/// writer is flushed before returning.
pub fn run_filter<R: Read, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<PipelineOutput, FilterError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).map_err(FilterError::Read)?;

    let result = photogate_core::run(&bytes)?;

    output.write_all(&result.jpeg).map_err(FilterError::Write)?;
    output.flush().map_err(FilterError::Write)?;

    info!(
        source = %result.source_format,
        width = result.width,
        height = result.height,
        bytes = result.jpeg.len(),
        "wrote JPEG"
    );
    Ok(result)
}
