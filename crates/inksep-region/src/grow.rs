//! Region growing
//!
//! Scans the raster row-major and flood fills from every unvisited
//! chromatic pixel. Each seed is matched to the first ranked hue bucket
//! within tolerance of its own hue; the first time a bucket index is seen
//! it gets the next color id. The fill then admits any chromatic neighbor
//! whose hue is within tolerance of that bucket's representative hue, so a
//! region tracks the seed bucket rather than each pixel's own best bucket.
//!
//! Background pixels are never labeled and the fill does not cross them.

use crate::error::RegionResult;
use inksep_color::{ClassifierThresholds, HueBucket, find_bucket, hue_distance};
use inksep_core::{ColorId, HsvImage, LabelGrid};
use std::collections::VecDeque;

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets `(dx, dy)` for this connectivity.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// Options for region growing
#[derive(Debug, Clone)]
pub struct GrowOptions {
    /// Maximum hue distance between a pixel and the bucket hue
    pub hue_tolerance: u8,
    /// Connectivity of the fill
    pub connectivity: ConnectivityType,
}

impl Default for GrowOptions {
    fn default() -> Self {
        Self {
            hue_tolerance: 15,
            connectivity: ConnectivityType::EightWay,
        }
    }
}

impl GrowOptions {
    /// Set the hue tolerance
    pub fn with_hue_tolerance(mut self, tolerance: u8) -> Self {
        self.hue_tolerance = tolerance;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Where and how a color id was first discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSeed {
    /// Color id allocated at this seed
    pub id: ColorId,
    /// Index of the matched bucket in the ranked list
    pub bucket: usize,
    /// Representative hue of that bucket
    pub hue: u8,
    /// Seed column
    pub x: u32,
    /// Seed row
    pub y: u32,
}

/// Result of region growing over one raster.
#[derive(Debug, Clone)]
pub struct GrownRegions {
    labels: LabelGrid,
    bucket_ids: Vec<Option<ColorId>>,
    seeds: Vec<RegionSeed>,
    unmatched: usize,
}

impl GrownRegions {
    /// Per-pixel color ids.
    pub fn labels(&self) -> &LabelGrid {
        &self.labels
    }

    /// Consume the result, keeping only the label grid.
    pub fn into_labels(self) -> LabelGrid {
        self.labels
    }

    /// Color id per ranked bucket index (`None` if never seeded).
    pub fn bucket_ids(&self) -> &[Option<ColorId>] {
        &self.bucket_ids
    }

    /// Seeds in discovery order; `seeds()[id].id == id`.
    pub fn seeds(&self) -> &[RegionSeed] {
        &self.seeds
    }

    /// Number of color ids allocated.
    pub fn color_count(&self) -> usize {
        self.seeds.len()
    }

    /// Chromatic seed pixels skipped because no bucket was close enough.
    pub fn unmatched(&self) -> usize {
        self.unmatched
    }
}

/// Grow color regions over `image`.
///
/// `buckets` is the ranked hue list, normally from
/// [`inksep_color::rank_hues`] on the same image. A chromatic pixel with no
/// bucket within tolerance is left unlabeled.
///
/// # Errors
///
/// Only fails if the label grid cannot be allocated.
pub fn grow_regions(
    image: &HsvImage,
    thresholds: &ClassifierThresholds,
    buckets: &[HueBucket],
    options: &GrowOptions,
) -> RegionResult<GrownRegions> {
    let (w, h) = image.dimensions();
    let mut labels = LabelGrid::new(w, h)?;
    let mut bucket_ids: Vec<Option<ColorId>> = vec![None; buckets.len()];
    let mut seeds = Vec::new();
    let mut unmatched = 0;

    for y in 0..h {
        for x in 0..w {
            if labels.get_pixel_unchecked(x, y).is_some() {
                continue;
            }
            let Some(hue) = thresholds.chromatic_hue(image.get_pixel_unchecked(x, y)) else {
                continue;
            };
            let Some(idx) = find_bucket(buckets, hue, options.hue_tolerance) else {
                unmatched += 1;
                continue;
            };

            let bucket_hue = buckets[idx].hue;
            let id = match bucket_ids[idx] {
                Some(id) => id,
                None => {
                    let id = seeds.len();
                    let px = image.get_pixel_unchecked(x, y);
                    log::debug!(
                        "bucket {} -> color {} (hue {}, s {}, v {}) at ({}, {})",
                        idx,
                        id,
                        bucket_hue,
                        px.s,
                        px.v,
                        x,
                        y
                    );
                    bucket_ids[idx] = Some(id);
                    seeds.push(RegionSeed {
                        id,
                        bucket: idx,
                        hue: bucket_hue,
                        x,
                        y,
                    });
                    id
                }
            };

            let filled = fill_region(
                image,
                thresholds,
                &mut labels,
                (x, y),
                bucket_hue,
                id,
                options,
            );
            log::trace!("color {}: filled {} px from ({}, {})", id, filled, x, y);
        }
    }

    if unmatched > 0 {
        log::debug!("{} chromatic seed pixels matched no bucket", unmatched);
    }

    Ok(GrownRegions {
        labels,
        bucket_ids,
        seeds,
        unmatched,
    })
}

/// Breadth-first fill from `seed`, labeling admitted pixels with `id`.
///
/// Returns the number of pixels labeled, seed included.
fn fill_region(
    image: &HsvImage,
    thresholds: &ClassifierThresholds,
    labels: &mut LabelGrid,
    seed: (u32, u32),
    bucket_hue: u8,
    id: ColorId,
    options: &GrowOptions,
) -> usize {
    let mut queue = VecDeque::new();
    labels.set_pixel_unchecked(seed.0, seed.1, Some(id));
    queue.push_back(seed);
    let mut filled = 1;

    while let Some((x, y)) = queue.pop_front() {
        for &(dx, dy) in options.connectivity.offsets() {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if !labels.contains(nx, ny) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if labels.get_pixel_unchecked(nx, ny).is_some() {
                continue;
            }
            let Some(hue) = thresholds.chromatic_hue(image.get_pixel_unchecked(nx, ny)) else {
                continue;
            };
            if hue_distance(hue, bucket_hue) <= options.hue_tolerance {
                labels.set_pixel_unchecked(nx, ny, Some(id));
                queue.push_back((nx, ny));
                filled += 1;
            }
        }
    }

    filled
}
