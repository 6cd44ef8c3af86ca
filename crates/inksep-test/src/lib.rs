//! inksep-test - Regression test framework for inksep
//!
//! Provides [`RegParams`], which collects the checks of one regression test
//! and reports them together, plus synthetic fixtures: line-art style pages
//! with flat color fills and black outlines, and masks drawn from ASCII.
//!
//! # Usage
//!
//! ```ignore
//! use inksep_test::RegParams;
//!
//! let mut rp = RegParams::new("grow");
//! rp.compare_values(2.0, regions.color_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"; display mode also
//!   writes masks to `tests/regout/`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use inksep_core::{Mask, Rgb, RgbImage};

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(220, 30, 30);
pub const GREEN: Rgb = Rgb::new(40, 200, 60);
pub const BLUE: Rgb = Rgb::new(30, 60, 220);

/// Get the path to the workspace root
pub fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // inksep-test is at crates/inksep-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Builder for synthetic line-art pages.
///
/// Starts as white paper; shapes are clipped to the page.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    image: RgbImage,
}

impl PageBuilder {
    /// Blank white page.
    pub fn new(width: u32, height: u32) -> TestResult<Self> {
        let image = RgbImage::new_fill(width, height, WHITE)
            .map_err(|e| TestError::InvalidFixture(e.to_string()))?;
        Ok(Self { image })
    }

    /// Fill a rectangle with a flat color.
    pub fn fill_rect(mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) -> Self {
        let (pw, ph) = self.image.dimensions();
        for yy in y..(y + h).min(ph) {
            for xx in x..(x + w).min(pw) {
                self.image.set_pixel_unchecked(xx, yy, color);
            }
        }
        self
    }

    /// Draw a 1-pixel rectangle border.
    pub fn outline_rect(self, x: u32, y: u32, w: u32, h: u32, color: Rgb) -> Self {
        if w == 0 || h == 0 {
            return self;
        }
        self.fill_rect(x, y, w, 1, color)
            .fill_rect(x, y + h - 1, w, 1, color)
            .fill_rect(x, y, 1, h, color)
            .fill_rect(x + w - 1, y, 1, h, color)
    }

    /// Filled rectangle with a black outline drawn just outside it.
    pub fn outlined_fill(self, x: u32, y: u32, w: u32, h: u32, color: Rgb) -> Self {
        let page = self.fill_rect(x, y, w, h, color);
        if x == 0 || y == 0 {
            return page;
        }
        page.outline_rect(x - 1, y - 1, w + 2, h + 2, BLACK)
    }

    /// Finish the page.
    pub fn build(self) -> RgbImage {
        self.image
    }
}

/// A 120x80 page with an outlined red square (30x30 at (10, 10)), an
/// outlined blue square (30x30 at (60, 10)) and a green 8x8 speck at
/// (10, 60) too small to become a mask.
pub fn sample_page() -> TestResult<RgbImage> {
    Ok(PageBuilder::new(120, 80)?
        .outlined_fill(10, 10, 30, 30, RED)
        .outlined_fill(60, 10, 30, 30, BLUE)
        .fill_rect(10, 60, 8, 8, GREEN)
        .build())
}

/// Build a mask from rows of text; `#` is set, anything else is clear.
pub fn mask_from_ascii(rows: &[&str]) -> TestResult<Mask> {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.chars().count());
    if rows.iter().any(|r| r.chars().count() != w) {
        return Err(TestError::InvalidFixture("ragged rows".to_string()));
    }
    let mut mask =
        Mask::new(w as u32, h as u32).map_err(|e| TestError::InvalidFixture(e.to_string()))?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                mask.set(x as u32, y as u32);
            }
        }
    }
    Ok(mask)
}

/// A `width` x `height` mask with one filled rectangle.
pub fn rect_mask(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> TestResult<Mask> {
    let mut mask = Mask::new(width, height).map_err(|e| TestError::InvalidFixture(e.to_string()))?;
    for yy in y..(y + h).min(height) {
        for xx in x..(x + w).min(width) {
            mask.set(xx, yy);
        }
    }
    Ok(mask)
}
