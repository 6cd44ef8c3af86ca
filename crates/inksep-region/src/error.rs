//! Error types for inksep-region

use inksep_core::ColorId;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inksep_core::Error),

    /// A label references a color id the equivalence table does not know
    #[error("color id {id} outside equivalence table of {len} ids")]
    UnknownColorId { id: ColorId, len: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
