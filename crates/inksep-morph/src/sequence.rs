//! Cleanup sequences
//!
//! A cleanup is a list of mask operations written as a string. Operations
//! are separated by `+` and whitespace is ignored. Each operation is a
//! case-insensitive letter with an optional neighbor count:
//!
//! - `e[n]` - erode, clear set pixels whose 3x3 count is `<= n` (default 5)
//! - `d[n]` - dilate, set clear pixels whose 3x3 count is `>= n` (default 2)
//! - `i[n]` - remove pixels with `<= n` set 8-neighbors (default 2)
//! - `g` - bridge gaps
//!
//! # Examples
//!
//! ```
//! use inksep_morph::sequence::{MorphOp, MorphSequence};
//!
//! let seq = MorphSequence::parse("e5 + d2 + e5 + g").unwrap();
//! assert_eq!(seq.ops().len(), 4);
//! assert_eq!(seq.ops()[3], MorphOp::BridgeGaps);
//! assert_eq!(seq, MorphSequence::default());
//! ```

use crate::binary::{
    DEFAULT_DILATE_COUNT, DEFAULT_ERODE_COUNT, DEFAULT_ISOLATED_COUNT, dilate_count, erode_count,
    remove_isolated_count,
};
use crate::bridge::{BridgeOptions, bridge_gaps};
use crate::{MorphError, MorphResult};
use inksep_core::Mask;
use std::fmt;
use std::str::FromStr;

/// A parsed cleanup operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Neighbor-count erosion
    Erode {
        /// Largest 3x3 count that is cleared
        max_count: u32,
    },
    /// Neighbor-count dilation
    Dilate {
        /// Smallest 3x3 count that is set
        min_count: u32,
    },
    /// Isolated-pixel removal
    RemoveIsolated {
        /// Largest 8-neighbor count that is cleared
        max_neighbors: u32,
    },
    /// Gap bridging
    BridgeGaps,
}

impl MorphOp {
    /// Apply this operation to a mask
    pub fn apply(&self, mask: &Mask, bridge: &BridgeOptions) -> Mask {
        match *self {
            MorphOp::Erode { max_count } => erode_count(mask, max_count),
            MorphOp::Dilate { min_count } => dilate_count(mask, min_count),
            MorphOp::RemoveIsolated { max_neighbors } => remove_isolated_count(mask, max_neighbors),
            MorphOp::BridgeGaps => bridge_gaps(mask, bridge),
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphOp::Erode { max_count } => write!(f, "e{}", max_count),
            MorphOp::Dilate { min_count } => write!(f, "d{}", min_count),
            MorphOp::RemoveIsolated { max_neighbors } => write!(f, "i{}", max_neighbors),
            MorphOp::BridgeGaps => write!(f, "g"),
        }
    }
}

/// A parsed cleanup sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphSequence {
    ops: Vec<MorphOp>,
}

impl Default for MorphSequence {
    /// Erode, dilate, erode, then bridge gaps.
    fn default() -> Self {
        Self {
            ops: vec![
                MorphOp::Erode {
                    max_count: DEFAULT_ERODE_COUNT,
                },
                MorphOp::Dilate {
                    min_count: DEFAULT_DILATE_COUNT,
                },
                MorphOp::Erode {
                    max_count: DEFAULT_ERODE_COUNT,
                },
                MorphOp::BridgeGaps,
            ],
        }
    }
}

impl MorphSequence {
    /// Build a sequence from already parsed operations. May be empty.
    pub fn from_ops(ops: Vec<MorphOp>) -> Self {
        Self { ops }
    }

    /// Parse a sequence string
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSequence`] for empty input, empty or
    /// unknown operations and malformed counts, and
    /// [`MorphError::CountOutOfRange`] for counts a 3x3 window cannot reach.
    pub fn parse(sequence: &str) -> MorphResult<Self> {
        if sequence.trim().is_empty() {
            return Err(MorphError::InvalidSequence("empty sequence".to_string()));
        }

        let mut ops = Vec::new();
        for (i, part) in sequence.split('+').enumerate() {
            let op_str: String = part.chars().filter(|c| !c.is_whitespace()).collect();
            if op_str.is_empty() {
                return Err(MorphError::InvalidSequence(format!(
                    "empty operation at position {}",
                    i + 1
                )));
            }
            ops.push(Self::parse_operation(&op_str)?);
        }

        Ok(MorphSequence { ops })
    }

    fn parse_operation(op_str: &str) -> MorphResult<MorphOp> {
        let mut chars = op_str.chars();
        let Some(first) = chars.next() else {
            return Err(MorphError::InvalidSequence("empty operation".to_string()));
        };
        let first = first.to_ascii_lowercase();
        let rest = chars.as_str();

        match first {
            'e' => {
                let max_count = Self::parse_count(first, rest, DEFAULT_ERODE_COUNT, 9)?;
                Ok(MorphOp::Erode { max_count })
            }
            'd' => {
                let min_count = Self::parse_count(first, rest, DEFAULT_DILATE_COUNT, 9)?;
                Ok(MorphOp::Dilate { min_count })
            }
            'i' => {
                let max_neighbors = Self::parse_count(first, rest, DEFAULT_ISOLATED_COUNT, 8)?;
                Ok(MorphOp::RemoveIsolated { max_neighbors })
            }
            'g' if rest.is_empty() => Ok(MorphOp::BridgeGaps),
            'g' => Err(MorphError::InvalidSequence(format!(
                "gap bridging takes no argument: '{}'",
                op_str
            ))),
            _ => Err(MorphError::InvalidSequence(format!(
                "unknown operation '{}' in '{}'",
                first, op_str
            ))),
        }
    }

    fn parse_count(op: char, s: &str, default: u32, max: u32) -> MorphResult<u32> {
        if s.is_empty() {
            return Ok(default);
        }
        let count: u32 = s.parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid count '{}' for '{}'", s, op))
        })?;
        if count > max {
            return Err(MorphError::CountOutOfRange { op, count, max });
        }
        Ok(count)
    }

    /// The operations in order
    pub fn ops(&self) -> &[MorphOp] {
        &self.ops
    }

    /// Check whether the sequence has no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Run every operation in order.
    pub fn apply(&self, mask: &Mask, bridge: &BridgeOptions) -> Mask {
        let mut current = mask.clone();
        for op in &self.ops {
            current = op.apply(&current, bridge);
        }
        current
    }
}

impl FromStr for MorphSequence {
    type Err = MorphError;

    fn from_str(s: &str) -> MorphResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for MorphSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Parse `sequence` and run it on `mask`.
pub fn morph_sequence(mask: &Mask, sequence: &str, bridge: &BridgeOptions) -> MorphResult<Mask> {
    Ok(MorphSequence::parse(sequence)?.apply(mask, bridge))
}
