//! inksep core - Basic data structures for color separation
//!
//! This crate provides the fundamental containers used throughout the
//! inksep workspace:
//!
//! - [`Raster`] - Row-major pixel grid, specialised as [`RgbImage`],
//!   [`HsvImage`] and [`LabelGrid`]
//! - [`Mask`] - Binary raster with a running set-pixel count
//! - [`Pta`] - Integer point arrays, used for rendering bridge lines
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row.

pub mod error;
pub mod label;
pub mod mask;
pub mod pta;
pub mod raster;

pub use error::{Error, Result};
pub use label::{ColorId, LabelGrid};
pub use mask::Mask;
pub use pta::{Pta, generate_line_pta};
pub use raster::{Hsv, HsvImage, Raster, Rgb, RgbImage};
