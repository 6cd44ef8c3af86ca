//! Neighbor-count binary morphology
//!
//! These are not structuring-element operations. Each rule looks at the
//! number of set pixels in the 3x3 window around a pixel:
//!
//! - erode clears a set pixel whose window (center included) holds at most
//!   `max_count` set pixels
//! - dilate sets a clear pixel whose window holds at least `min_count`
//! - isolated-pixel removal clears a set pixel with at most `max_neighbors`
//!   set 8-neighbors
//!
//! Erode and dilate read a snapshot: every decision is taken on the input
//! and the changes are applied together. Isolated-pixel removal updates in
//! raster order, so a pixel cleared earlier in the scan is already gone
//! when later pixels count their neighbors.
//!
//! Pixels outside the raster count as clear.

use inksep_core::Mask;

/// Erode threshold of the default cleanup
pub const DEFAULT_ERODE_COUNT: u32 = 5;
/// Dilate threshold of the default cleanup
pub const DEFAULT_DILATE_COUNT: u32 = 2;
/// Neighbor threshold for isolated-pixel removal
pub const DEFAULT_ISOLATED_COUNT: u32 = 2;

/// Erode with the default threshold of 5.
pub fn erode(mask: &Mask) -> Mask {
    erode_count(mask, DEFAULT_ERODE_COUNT)
}

/// Clear every set pixel whose 3x3 count is `<= max_count`.
pub fn erode_count(mask: &Mask, max_count: u32) -> Mask {
    let mut out = mask.clone();
    for (x, y) in mask.set_pixels() {
        if mask.count_3x3(x, y) <= max_count {
            out.clear(x, y);
        }
    }
    out
}

/// Dilate with the default threshold of 2.
pub fn dilate(mask: &Mask) -> Mask {
    dilate_count(mask, DEFAULT_DILATE_COUNT)
}

/// Set every clear pixel whose 3x3 count is `>= min_count`.
///
/// A `min_count` of 0 sets every pixel.
pub fn dilate_count(mask: &Mask, min_count: u32) -> Mask {
    let (w, h) = mask.dimensions();
    let mut out = mask.clone();
    for y in 0..h {
        for x in 0..w {
            if !mask.get(x, y) && mask.count_3x3(x, y) >= min_count {
                out.set(x, y);
            }
        }
    }
    out
}

/// Remove isolated pixels with the default threshold of 2.
pub fn remove_isolated(mask: &Mask) -> Mask {
    remove_isolated_count(mask, DEFAULT_ISOLATED_COUNT)
}

/// Clear set pixels with `<= max_neighbors` set 8-neighbors, in raster
/// order.
pub fn remove_isolated_count(mask: &Mask, max_neighbors: u32) -> Mask {
    let (w, h) = mask.dimensions();
    let mut out = mask.clone();
    for y in 0..h {
        for x in 0..w {
            if out.get(x, y) && out.count_8(x, y) <= max_neighbors {
                out.clear(x, y);
            }
        }
    }
    out
}
