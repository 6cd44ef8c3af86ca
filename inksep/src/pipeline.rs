//! Color separation pipeline
//!
//! classify -> rank hues -> grow regions -> merge color ids -> build masks
//! -> drop small masks -> clean up each remaining mask.
//!
//! Everything after decoding is deterministic: the same raster and options
//! always give the same masks under the same names.

use crate::error::SeparateResult;
use inksep_color::{ClassifierThresholds, HueBucket, convert_rgb_to_hsv, rank_hues};
use inksep_core::{ColorId, HsvImage, LabelGrid, Mask, RgbImage};
use inksep_io::ImageFormat;
use inksep_morph::{BridgeOptions, MorphSequence};
use inksep_region::{
    Equivalence, GrowOptions, MergePolicy, build_masks, filter_by_size, grow_regions,
    merge_equivalent,
};
use std::path::{Path, PathBuf};

/// Options for the whole pipeline
#[derive(Debug, Clone)]
pub struct SeparateOptions {
    /// Background classification thresholds
    pub thresholds: ClassifierThresholds,
    /// Region growing options; the hue tolerance is also used for merging
    pub grow: GrowOptions,
    /// How close color ids are merged
    pub merge_policy: MergePolicy,
    /// Masks with fewer pixels (before cleanup) are dropped
    pub min_region_size: usize,
    /// Cleanup applied to every kept mask
    pub cleanup: MorphSequence,
    /// Gap bridging options used by the cleanup
    pub bridge: BridgeOptions,
}

impl Default for SeparateOptions {
    fn default() -> Self {
        Self {
            thresholds: ClassifierThresholds::default(),
            grow: GrowOptions::default(),
            merge_policy: MergePolicy::NearestEarlier,
            min_region_size: 150,
            cleanup: MorphSequence::default(),
            bridge: BridgeOptions::default(),
        }
    }
}

impl SeparateOptions {
    /// Set the classifier thresholds
    pub fn with_thresholds(mut self, thresholds: ClassifierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the region growing options
    pub fn with_grow(mut self, grow: GrowOptions) -> Self {
        self.grow = grow;
        self
    }

    /// Set the merge policy
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    /// Set the minimum mask size
    pub fn with_min_region_size(mut self, size: usize) -> Self {
        self.min_region_size = size;
        self
    }

    /// Set the cleanup sequence
    pub fn with_cleanup(mut self, cleanup: MorphSequence) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Parse and set the cleanup sequence, e.g. `"e5 + d2 + e5 + g"`
    pub fn with_cleanup_str(self, sequence: &str) -> SeparateResult<Self> {
        Ok(self.with_cleanup(MorphSequence::parse(sequence)?))
    }

    /// Set the gap bridging options
    pub fn with_bridge(mut self, bridge: BridgeOptions) -> Self {
        self.bridge = bridge;
        self
    }
}

/// One emitted color mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMask {
    /// Canonical color id
    pub id: ColorId,
    /// Output name derived from the id
    pub name: String,
    /// Pixel count before cleanup
    pub pixel_count: usize,
    /// Cleaned mask
    pub mask: Mask,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct Separation {
    /// Ranked hue buckets
    pub buckets: Vec<HueBucket>,
    /// Per-pixel color ids
    pub labels: LabelGrid,
    /// Color id to canonical id
    pub equivalence: Equivalence,
    /// Emitted masks in ascending canonical id order
    pub masks: Vec<ColorMask>,
}

impl Separation {
    /// Number of color ids allocated during region growing.
    pub fn color_count(&self) -> usize {
        self.equivalence.len()
    }

    /// Look up an emitted mask by name.
    pub fn get(&self, name: &str) -> Option<&ColorMask> {
        self.masks.iter().find(|m| m.name == name)
    }

    /// Names of the emitted masks, in order.
    pub fn names(&self) -> Vec<&str> {
        self.masks.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Run the pipeline on an HSV raster.
///
/// # Errors
///
/// Only allocation-level failures (invalid raster sizes) are reported.
/// Per-pixel processing never fails.
pub fn separate_colors(image: &HsvImage, options: &SeparateOptions) -> SeparateResult<Separation> {
    let buckets = rank_hues(image, &options.thresholds);
    let regions = grow_regions(image, &options.thresholds, &buckets, &options.grow)?;
    let equivalence = merge_equivalent(
        &buckets,
        regions.bucket_ids(),
        options.grow.hue_tolerance,
        options.merge_policy,
    );
    let labels = regions.into_labels();

    let candidates = build_masks(&labels, &equivalence)?;
    let candidate_count = candidates.len();
    let kept = filter_by_size(candidates, options.min_region_size);

    let masks: Vec<ColorMask> = kept
        .into_iter()
        .map(|m| {
            let pixel_count = m.pixel_count();
            let mask = options.cleanup.apply(&m.mask, &options.bridge);
            log::debug!(
                "color {}: cleanup {} -> {} px",
                m.id,
                pixel_count,
                mask.count()
            );
            ColorMask {
                id: m.id,
                name: mask_name(m.id),
                pixel_count,
                mask,
            }
        })
        .collect();

    log::info!(
        "{} hues, {} color ids, {} canonical, {} masks emitted",
        buckets.len(),
        equivalence.len(),
        candidate_count,
        masks.len()
    );

    Ok(Separation {
        buckets,
        labels,
        equivalence,
        masks,
    })
}

/// Convert an RGB raster to HSV and run the pipeline.
pub fn separate_rgb(image: &RgbImage, options: &SeparateOptions) -> SeparateResult<Separation> {
    separate_colors(&convert_rgb_to_hsv(image), options)
}

/// Output name for a canonical color id.
///
/// `a`..`z` for 0..25, then `aa`, `ab`, ... like spreadsheet columns.
///
/// # Examples
///
/// ```
/// use inksep::mask_name;
///
/// assert_eq!(mask_name(0), "a");
/// assert_eq!(mask_name(25), "z");
/// assert_eq!(mask_name(26), "aa");
/// ```
pub fn mask_name(id: ColorId) -> String {
    let mut n = id + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Write every emitted mask as `<name>.<ext>` into `dir`.
///
/// The directory is created if missing. Returns the written paths in
/// output order.
pub fn write_separation<P: AsRef<Path>>(
    separation: &Separation,
    dir: P,
    format: ImageFormat,
) -> SeparateResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(inksep_io::IoError::from)?;

    let mut paths = Vec::with_capacity(separation.masks.len());
    for m in &separation.masks {
        let path = dir.join(format!("{}.{}", m.name, format.extension()));
        inksep_io::write_mask(&m.mask, &path, format)?;
        log::info!("wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inksep_core::Rgb;

    #[test]
    fn test_mask_name_sequence() {
        assert_eq!(mask_name(1), "b");
        assert_eq!(mask_name(27), "ab");
        assert_eq!(mask_name(51), "az");
        assert_eq!(mask_name(52), "ba");
        assert_eq!(mask_name(701), "zz");
        assert_eq!(mask_name(702), "aaa");
    }

    #[test]
    fn test_options_builders() {
        let opts = SeparateOptions::default()
            .with_min_region_size(10)
            .with_merge_policy(MergePolicy::Transitive)
            .with_cleanup_str("e4 + g")
            .unwrap();
        assert_eq!(opts.min_region_size, 10);
        assert_eq!(opts.merge_policy, MergePolicy::Transitive);
        assert_eq!(opts.cleanup.ops().len(), 2);
        assert!(SeparateOptions::default().with_cleanup_str("q").is_err());
    }

    fn single_blob() -> RgbImage {
        let mut img = RgbImage::new_fill(40, 40, Rgb::new(255, 255, 255)).unwrap();
        for y in 5..35 {
            for x in 5..35 {
                img.set_pixel(x, y, Rgb::new(220, 30, 30)).unwrap();
            }
        }
        img
    }

    fn in_blob(x: u32, y: u32, margin: u32) -> bool {
        (5 - margin..35 + margin).contains(&x) && (5 - margin..35 + margin).contains(&y)
    }

    #[test]
    fn test_single_blob_exact_without_cleanup() {
        let opts = SeparateOptions::default().with_cleanup(MorphSequence::from_ops(Vec::new()));
        let sep = separate_rgb(&single_blob(), &opts).unwrap();
        assert_eq!(sep.names(), vec!["a"]);

        let a = sep.get("a").unwrap();
        assert_eq!(a.pixel_count, 900);
        assert_eq!(a.mask.count(), 900);
        for y in 0..40 {
            for x in 0..40 {
                assert_eq!(a.mask.get(x, y), in_blob(x, y, 0), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_single_blob_default_cleanup() {
        let sep = separate_rgb(&single_blob(), &SeparateOptions::default()).unwrap();
        assert_eq!(sep.names(), vec!["a"]);

        // e5 + d2 + e5 keeps the square and adds a one-pixel ring along
        // each edge, short of the corners: 900 + 4 * 26
        let a = sep.get("a").unwrap();
        assert_eq!(a.pixel_count, 900);
        assert_eq!(a.mask.count(), 1004);
        for y in 0..40 {
            for x in 0..40 {
                if (6..34).contains(&x) && (6..34).contains(&y) {
                    assert!(a.mask.get(x, y), "interior ({}, {}) cleared", x, y);
                }
                if !in_blob(x, y, 1) {
                    assert!(!a.mask.get(x, y), "({}, {}) set outside blob", x, y);
                }
            }
        }
        assert!(a.mask.get(5, 5));
        assert!(a.mask.get(4, 20));
        assert!(!a.mask.get(4, 4));
        assert!(!a.mask.get(4, 6));
    }

    #[test]
    fn test_empty_raster() {
        let img = HsvImage::new(4, 4).unwrap();
        let sep = separate_colors(&img, &SeparateOptions::default()).unwrap();
        assert!(sep.masks.is_empty());
        assert_eq!(sep.color_count(), 0);
    }
}
