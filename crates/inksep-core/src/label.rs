//! Label grid - per-pixel color identifiers
//!
//! The label grid records which color id (if any) region growing assigned
//! to each pixel. `None` marks background or not-yet-visited pixels.

use crate::raster::Raster;

/// Identifier assigned to a grown region, in order of first discovery.
pub type ColorId = usize;

/// Grid of optional color ids, one per pixel.
pub type LabelGrid = Raster<Option<ColorId>>;

impl Raster<Option<ColorId>> {
    /// Number of pixels that carry a color id.
    pub fn count_labeled(&self) -> usize {
        self.data().iter().filter(|l| l.is_some()).count()
    }

    /// Number of pixels labeled with `id`.
    pub fn count_label(&self, id: ColorId) -> usize {
        self.data().iter().filter(|&&l| l == Some(id)).count()
    }

    /// Largest color id present, if any.
    pub fn max_label(&self) -> Option<ColorId> {
        self.data().iter().flatten().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_counts() {
        let mut grid = LabelGrid::new(3, 2).unwrap();
        grid.set_pixel_unchecked(0, 0, Some(0));
        grid.set_pixel_unchecked(1, 0, Some(2));
        grid.set_pixel_unchecked(2, 1, Some(2));
        assert_eq!(grid.count_labeled(), 3);
        assert_eq!(grid.count_label(2), 2);
        assert_eq!(grid.max_label(), Some(2));
    }

    #[test]
    fn test_empty_grid_has_no_max() {
        let grid = LabelGrid::new(2, 2).unwrap();
        assert_eq!(grid.max_label(), None);
        assert_eq!(grid.count_labeled(), 0);
    }
}
