//! Per-color masks
//!
//! Splits a label grid into one binary mask per canonical color id and
//! drops colors too small to be real ink.

use crate::error::{RegionError, RegionResult};
use crate::merge::Equivalence;
use inksep_core::{ColorId, LabelGrid, Mask};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Binary mask of one canonical color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMask {
    /// Canonical color id
    pub id: ColorId,
    /// Pixels belonging to this color
    pub mask: Mask,
}

impl CanonicalMask {
    /// Number of set pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.mask.count()
    }
}

/// Build one mask per canonical id that owns at least one pixel.
///
/// Pixels labeled `c` are set in the mask of `equivalence[c]`. Masks are
/// returned in ascending canonical id order.
///
/// # Errors
///
/// Returns [`RegionError::UnknownColorId`] if a label is outside the
/// equivalence table.
pub fn build_masks(labels: &LabelGrid, equivalence: &Equivalence) -> RegionResult<Vec<CanonicalMask>> {
    let (w, h) = labels.dimensions();
    let mut masks: BTreeMap<ColorId, Mask> = BTreeMap::new();

    for (x, y, label) in labels.enumerate_pixels() {
        let Some(id) = label else { continue };
        let canon = equivalence.get(id).ok_or(RegionError::UnknownColorId {
            id,
            len: equivalence.len(),
        })?;
        let mask = match masks.entry(canon) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(Mask::new(w, h)?),
        };
        mask.set(x, y);
    }

    Ok(masks
        .into_iter()
        .map(|(id, mask)| CanonicalMask { id, mask })
        .collect())
}

/// Keep masks with at least `min_size` pixels.
pub fn filter_by_size(masks: Vec<CanonicalMask>, min_size: usize) -> Vec<CanonicalMask> {
    masks
        .into_iter()
        .filter(|m| {
            let keep = m.pixel_count() >= min_size;
            if keep {
                log::debug!("color {}: {} px", m.id, m.pixel_count());
            } else {
                log::debug!(
                    "color {}: {} px below {}, dropped",
                    m.id,
                    m.pixel_count(),
                    min_size
                );
            }
            keep
        })
        .collect()
}
