//! inksep-morph - Mask cleanup
//!
//! Neighbor-count morphology and gap bridging for the binary masks
//! produced by color separation:
//!
//! - [`binary`] - erode, dilate and isolated-pixel removal
//! - [`bridge`] - detect broken column runs and draw bridges across them
//! - [`sequence`] - cleanup sequences such as `"e5 + d2 + e5 + g"`

pub mod binary;
pub mod bridge;
mod error;
pub mod sequence;

pub use binary::{dilate, dilate_count, erode, erode_count, remove_isolated, remove_isolated_count};
pub use bridge::{BridgeMode, BridgeOptions, GapSegment, bridge_gaps, find_gap_segments};
pub use error::{MorphError, MorphResult};
pub use sequence::{MorphOp, MorphSequence, morph_sequence};
