//! Pixel classification
//!
//! Every HSV pixel is either background paper (white), background outline
//! (black), or chromatic ink carrying a hue. The white test runs first: a
//! pixel satisfying both background tests is white.

use inksep_core::Hsv;

/// Classification of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Paper: low hue, low saturation, bright
    BackgroundWhite,
    /// Outline: low saturation at any brightness
    BackgroundBlack,
    /// Ink with the given hue
    Chromatic(u8),
}

impl PixelClass {
    /// Hue of a chromatic pixel, `None` for background.
    #[inline]
    pub fn hue(self) -> Option<u8> {
        match self {
            PixelClass::Chromatic(h) => Some(h),
            _ => None,
        }
    }

    /// Check whether the pixel is chromatic.
    #[inline]
    pub fn is_chromatic(self) -> bool {
        matches!(self, PixelClass::Chromatic(_))
    }
}

/// Thresholds for the background tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierThresholds {
    /// White requires `h <= white_max_hue`
    pub white_max_hue: u8,
    /// White requires `s <= white_max_saturation`
    pub white_max_saturation: u8,
    /// White requires `v >= white_min_value`
    pub white_min_value: u8,
    /// Black is any remaining pixel with `s <= black_max_saturation`
    pub black_max_saturation: u8,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            white_max_hue: 15,
            white_max_saturation: 15,
            white_min_value: 100,
            black_max_saturation: 30,
        }
    }
}

impl ClassifierThresholds {
    /// Set the maximum saturation still counted as black outline
    pub fn with_black_max_saturation(mut self, s: u8) -> Self {
        self.black_max_saturation = s;
        self
    }

    /// Set the minimum value counted as white paper
    pub fn with_white_min_value(mut self, v: u8) -> Self {
        self.white_min_value = v;
        self
    }

    /// Classify raw channel values.
    #[inline]
    pub fn classify_hsv(&self, h: u8, s: u8, v: u8) -> PixelClass {
        if h <= self.white_max_hue && s <= self.white_max_saturation && v >= self.white_min_value
        {
            PixelClass::BackgroundWhite
        } else if s <= self.black_max_saturation {
            PixelClass::BackgroundBlack
        } else {
            PixelClass::Chromatic(h)
        }
    }

    /// Classify an HSV pixel.
    #[inline]
    pub fn classify(&self, px: Hsv) -> PixelClass {
        self.classify_hsv(px.h, px.s, px.v)
    }

    /// Hue of the pixel if it is chromatic.
    #[inline]
    pub fn chromatic_hue(&self, px: Hsv) -> Option<u8> {
        self.classify(px).hue()
    }
}

/// Classify `(h, s, v)` with the default thresholds.
///
/// # Examples
///
/// ```
/// use inksep_color::{PixelClass, classify};
///
/// assert_eq!(classify(0, 0, 255), PixelClass::BackgroundWhite);
/// assert_eq!(classify(0, 0, 0), PixelClass::BackgroundBlack);
/// assert_eq!(classify(120, 200, 200), PixelClass::Chromatic(120));
/// ```
pub fn classify(h: u8, s: u8, v: u8) -> PixelClass {
    ClassifierThresholds::default().classify_hsv(h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_boundaries() {
        assert_eq!(classify(15, 15, 100), PixelClass::BackgroundWhite);
        // One step past each white bound
        assert_eq!(classify(16, 15, 100), PixelClass::BackgroundBlack);
        assert_eq!(classify(15, 16, 100), PixelClass::BackgroundBlack);
        assert_eq!(classify(15, 15, 99), PixelClass::BackgroundBlack);
    }

    #[test]
    fn test_white_wins_over_black() {
        // Satisfies both tests: white is evaluated first
        assert_eq!(classify(0, 10, 200), PixelClass::BackgroundWhite);
    }

    #[test]
    fn test_black_boundary() {
        assert_eq!(classify(100, 30, 50), PixelClass::BackgroundBlack);
        assert_eq!(classify(100, 31, 50), PixelClass::Chromatic(100));
    }

    #[test]
    fn test_bright_unsaturated_high_hue_is_black() {
        // Not white because of the hue, so it falls to the saturation test
        assert_eq!(classify(90, 5, 250), PixelClass::BackgroundBlack);
    }

    #[test]
    fn test_deterministic() {
        for h in (0..180u8).step_by(7) {
            for s in (0..=255u8).step_by(17) {
                for v in (0..=255u8).step_by(51) {
                    assert_eq!(classify(h, s, v), classify(h, s, v));
                }
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let t = ClassifierThresholds::default().with_black_max_saturation(60);
        assert_eq!(t.classify_hsv(100, 50, 50), PixelClass::BackgroundBlack);
        assert_eq!(t.chromatic_hue(Hsv::new(100, 61, 50)), Some(100));
    }
}
