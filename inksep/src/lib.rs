//! inksep - Split line-art images into per-color masks
//!
//! Takes a raster such as a scanned coloring page and produces one binary
//! mask per dominant ink color. White paper and black outlines are treated
//! as background; every remaining hue is grown into regions, close hues
//! are merged, small colors are dropped and each mask is cleaned up with
//! neighbor-count morphology and gap bridging.
//!
//! # Example
//!
//! ```
//! use inksep::{Rgb, RgbImage, SeparateOptions, separate_rgb};
//!
//! let mut img = RgbImage::new_fill(40, 40, Rgb::new(255, 255, 255)).unwrap();
//! for y in 5..35 {
//!     for x in 5..35 {
//!         img.set_pixel(x, y, Rgb::new(220, 30, 30)).unwrap();
//!     }
//! }
//! let sep = separate_rgb(&img, &SeparateOptions::default()).unwrap();
//! assert_eq!(sep.names(), vec!["a"]);
//!
//! let a = sep.get("a").unwrap();
//! assert_eq!(a.pixel_count, 900);
//! assert!(a.mask.get(20, 20));
//! assert!(!a.mask.get(0, 0));
//! ```

pub mod display;
mod error;
pub mod pipeline;

// Re-export core types
pub use inksep_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use inksep_color as color;
pub use inksep_io as io;
pub use inksep_morph as morph;
pub use inksep_region as region;

pub use display::{DisplaySink, LogSink, NullSink, show_separation};
pub use error::{SeparateError, SeparateResult};
pub use pipeline::{
    ColorMask, SeparateOptions, Separation, mask_name, separate_colors, separate_rgb,
    write_separation,
};
