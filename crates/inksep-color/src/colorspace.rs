//! Color space conversion
//!
//! Converts 8-bit RGB into the 8-bit HSV representation the classifier
//! thresholds are expressed in:
//!
//! - `h`: hue in half-degrees, [0..179]
//! - `s`: saturation, [0..255]
//! - `v`: value (max channel), [0..255]

use inksep_core::{Hsv, HsvImage, Rgb, RgbImage};

/// Convert RGB to HSV.
///
/// `v = max(r, g, b)`, `s = round(255 * (max - min) / max)` and the hue is
/// the usual hexcone angle halved and rounded, wrapped into [0, 180).
/// Achromatic pixels (max == min) get hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = i32::from(r);
    let gi = i32::from(g);
    let bi = i32::from(b);

    let min = ri.min(gi).min(bi);
    let max = ri.max(gi).max(bi);
    let delta = max - min;

    let v = max as u8;
    if delta == 0 {
        return Hsv::new(0, 0, v);
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as i32;
    let h_raw = if ri == max {
        (gi - bi) as f32 / delta as f32
    } else if gi == max {
        2.0 + (bi - ri) as f32 / delta as f32
    } else {
        4.0 + (ri - gi) as f32 / delta as f32
    };

    // 60 degrees per sector, halved
    let mut h = h_raw * 30.0;
    if h < 0.0 {
        h += 180.0;
    }
    let mut h = (h + 0.5) as i32;
    if h >= 180 {
        h -= 180;
    }

    Hsv::new(h as u8, s.min(255) as u8, v)
}

/// Convert a whole RGB raster to HSV.
pub fn convert_rgb_to_hsv(image: &RgbImage) -> HsvImage {
    image.map(|Rgb { r, g, b }| rgb_to_hsv(r, g, b))
}

/// Absolute hue difference. Hue is treated as linear, not circular.
#[inline]
pub fn hue_distance(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsv(255, 0, 0), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(0, 255, 0), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv(0, 0, 255), Hsv::new(120, 255, 255));
    }

    #[test]
    fn test_secondaries() {
        assert_eq!(rgb_to_hsv(255, 255, 0).h, 30);
        assert_eq!(rgb_to_hsv(0, 255, 255).h, 90);
        assert_eq!(rgb_to_hsv(255, 0, 255).h, 150);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv::new(0, 0, 255));
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::new(0, 0, 0));
        assert_eq!(rgb_to_hsv(90, 90, 90), Hsv::new(0, 0, 90));
    }

    #[test]
    fn test_hue_wraps_below_180() {
        // Almost-red with a hint of blue sits just under 180
        let hsv = rgb_to_hsv(255, 0, 2);
        assert!(hsv.h < 180);
    }

    #[test]
    fn test_saturation_rounding() {
        // delta 100 over max 200 -> 127.5 -> 128
        assert_eq!(rgb_to_hsv(200, 100, 100).s, 128);
    }

    #[test]
    fn test_convert_image() {
        let img = RgbImage::from_vec(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap();
        let hsv = convert_rgb_to_hsv(&img);
        assert_eq!(hsv.get_pixel(0, 0).map(|p| p.h), Some(0));
        assert_eq!(hsv.get_pixel(1, 0).map(|p| p.h), Some(120));
    }

    #[test]
    fn test_hue_distance_is_linear() {
        assert_eq!(hue_distance(10, 25), 15);
        assert_eq!(hue_distance(2, 178), 176);
    }
}
