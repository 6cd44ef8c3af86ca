//! inksep-color - Color processing for ink separation
//!
//! This crate provides the read-only front of the separation pipeline:
//!
//! - **Color space conversion** ([`colorspace`]): RGB -> HSV on the 8-bit
//!   half-degree hue scale
//! - **Pixel classification** ([`classify`]): background white, background
//!   black, or chromatic with a hue
//! - **Hue histogram** ([`histogram`]): per-hue counts of chromatic pixels
//!   and the ranked bucket list consumed by region growing
//!
//! All functions here are pure and never fail.

pub mod classify;
pub mod colorspace;
pub mod histogram;

// Re-export core types
pub use inksep_core;

pub use classify::{ClassifierThresholds, PixelClass, classify};
pub use colorspace::{convert_rgb_to_hsv, hue_distance, rgb_to_hsv};
pub use histogram::{HueBucket, HueHistogram, find_bucket, rank_hues};
