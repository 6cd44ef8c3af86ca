//! Error types for inksep-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Invalid sequence format
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// Neighbor count outside what a 3x3 window can hold
    #[error("count {count} for '{op}' exceeds {max}")]
    CountOutOfRange { op: char, count: u32, max: u32 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
