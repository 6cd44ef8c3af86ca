//! Hue histogram and bucket ranking
//!
//! Counts chromatic pixels per exact hue value and ranks the hues by
//! frequency. The ranked list is the bucket table region growing consults
//! when it seeds a new region.

use crate::classify::ClassifierThresholds;
use crate::colorspace::hue_distance;
use inksep_core::HsvImage;

/// A distinct hue paired with its frequency among chromatic pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HueBucket {
    /// Number of chromatic pixels with exactly this hue
    pub count: u32,
    /// Representative hue of the bucket
    pub hue: u8,
}

/// Per-hue pixel counts.
#[derive(Debug, Clone)]
pub struct HueHistogram {
    counts: [u32; 256],
    total: u64,
}

impl Default for HueHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl HueHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Count every chromatic pixel of `image`.
    pub fn from_image(image: &HsvImage, thresholds: &ClassifierThresholds) -> Self {
        let mut hist = Self::new();
        for &px in image.data() {
            if let Some(h) = thresholds.chromatic_hue(px) {
                hist.add(h);
            }
        }
        hist
    }

    /// Record one pixel with hue `h`.
    #[inline]
    pub fn add(&mut self, h: u8) {
        self.counts[h as usize] += 1;
        self.total += 1;
    }

    /// Number of pixels with hue `h`.
    #[inline]
    pub fn count(&self, h: u8) -> u32 {
        self.counts[h as usize]
    }

    /// Total number of chromatic pixels counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct hues seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Rank the observed hues.
    ///
    /// Sorted by count descending; equal counts are ordered by hue
    /// descending.
    pub fn ranked(&self) -> Vec<HueBucket> {
        let mut buckets: Vec<HueBucket> = self
            .counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(h, &count)| HueBucket {
                count,
                hue: h as u8,
            })
            .collect();
        buckets.sort_by(|a, b| b.count.cmp(&a.count).then(b.hue.cmp(&a.hue)));
        buckets
    }
}

/// Build the histogram of `image` and return its ranked buckets.
pub fn rank_hues(image: &HsvImage, thresholds: &ClassifierThresholds) -> Vec<HueBucket> {
    let ranked = HueHistogram::from_image(image, thresholds).ranked();
    for (i, b) in ranked.iter().take(30).enumerate() {
        log::debug!("hue rank {}: hue {} ({} px)", i, b.hue, b.count);
    }
    ranked
}

/// Index of the first (most frequent) bucket whose hue is within
/// `tolerance` of `hue`, or `None` if no bucket qualifies.
pub fn find_bucket(buckets: &[HueBucket], hue: u8, tolerance: u8) -> Option<usize> {
    buckets
        .iter()
        .position(|b| hue_distance(b.hue, hue) <= tolerance)
}
