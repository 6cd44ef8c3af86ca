//! Error types for the separation pipeline

use thiserror::Error;

/// Errors that can occur while separating an image
#[derive(Debug, Error)]
pub enum SeparateError {
    /// Wrong number of input paths on the command line
    #[error("expected exactly one image path, got {0}")]
    InvalidArgumentCount(usize),

    /// Input could not be read or decoded
    #[error("cannot decode '{path}': {message}")]
    ImageDecodeFailure { path: String, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inksep_core::Error),

    /// Image I/O error
    #[error("io error: {0}")]
    Io(#[from] inksep_io::IoError),

    /// Region error
    #[error("region error: {0}")]
    Region(#[from] inksep_region::RegionError),

    /// Morphology error
    #[error("morph error: {0}")]
    Morph(#[from] inksep_morph::MorphError),
}

/// Result type for separation operations
pub type SeparateResult<T> = Result<T, SeparateError>;
