//! inksep-region - Region growing and color merging
//!
//! Turns a classified HSV raster into per-color binary masks:
//!
//! 1. [`grow_regions`] flood fills chromatic pixels, seeding each region
//!    from the ranked hue buckets and allocating color ids in scan order
//! 2. [`merge_equivalent`] maps color ids with close bucket hues to a
//!    canonical id
//! 3. [`build_masks`] and [`filter_by_size`] split the label grid into one
//!    mask per canonical id and drop the small ones
//!
//! [`render_labels`] paints a label grid for inspection.

mod error;
pub mod grow;
pub mod masks;
pub mod merge;
pub mod render;

pub use error::{RegionError, RegionResult};
pub use grow::{ConnectivityType, GrowOptions, GrownRegions, RegionSeed, grow_regions};
pub use masks::{CanonicalMask, build_masks, filter_by_size};
pub use merge::{Equivalence, MergePolicy, merge_equivalent};
pub use render::render_labels;
