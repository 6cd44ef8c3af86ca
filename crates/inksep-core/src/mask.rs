//! Mask - Binary raster with a running pixel count
//!
//! A mask holds one separated color. Set pixels belong to the color, clear
//! pixels do not. The number of set pixels is tracked on every write so
//! size filtering never has to rescan the raster.

use crate::error::{Error, Result};
use crate::pta::Pta;

/// Binary raster (set/clear) with a running set-pixel count.
///
/// # Examples
///
/// ```
/// use inksep_core::Mask;
///
/// let mut mask = Mask::new(8, 8).unwrap();
/// mask.set(2, 3);
/// mask.set(2, 3);
/// assert_eq!(mask.count(), 1);
/// assert!(mask.get(2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    count: usize,
}

impl Mask {
    /// Create an all-clear mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
            count: 0,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of set pixels.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check whether no pixel is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check whether `(x, y)` is set. Out-of-bounds coordinates read as clear.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[self.index(x, y)]
    }

    /// Signed lookup; anything outside the raster reads as clear.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> bool {
        x >= 0
            && y >= 0
            && x < self.width as i64
            && y < self.height as i64
            && self.bits[self.index(x as u32, y as u32)]
    }

    /// Set `(x, y)`. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32) {
        self.put(x, y, true);
    }

    /// Clear `(x, y)`. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn clear(&mut self, x: u32, y: u32) {
        self.put(x, y, false);
    }

    /// Write a value at `(x, y)`, keeping the count in sync.
    pub fn put(&mut self, x: u32, y: u32, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        let old = std::mem::replace(&mut self.bits[idx], value);
        match (old, value) {
            (false, true) => self.count += 1,
            (true, false) => self.count -= 1,
            _ => {}
        }
    }

    /// Count set pixels in the 3x3 neighborhood of `(x, y)`, center included.
    pub fn count_3x3(&self, x: u32, y: u32) -> u32 {
        let mut n = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if self.get_signed(x as i64 + dx, y as i64 + dy) {
                    n += 1;
                }
            }
        }
        n
    }

    /// Count set pixels among the 8 neighbors of `(x, y)`, center excluded.
    pub fn count_8(&self, x: u32, y: u32) -> u32 {
        self.count_3x3(x, y) - u32::from(self.get(x, y))
    }

    /// Set every in-bounds point of a point array.
    pub fn render_pta(&mut self, pta: &Pta) {
        for (x, y) in pta.iter() {
            if x >= 0 && y >= 0 {
                self.set(x as u32, y as u32);
            }
        }
    }

    /// Iterate the coordinates of set pixels in row-major order.
    pub fn set_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| ((i as u32) % w, (i as u32) / w))
    }

    /// Convert to 8-bit gray samples with values 0 or 255.
    pub fn to_gray(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| if b { 255 } else { 0 }).collect()
    }
}
