//! Color id equivalence
//!
//! Buckets whose representative hues are close end up with separate color
//! ids when they were seeded separately. Merging maps every color id to a
//! canonical id so each ink ends up in a single mask.

use inksep_color::{HueBucket, hue_distance};
use inksep_core::ColorId;

/// How close buckets are folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Each bucket maps to the lowest-indexed earlier bucket within
    /// tolerance. Single hop: chains are not followed.
    #[default]
    NearestEarlier,
    /// Buckets within tolerance are unioned; each connected group maps to
    /// the color id of its lowest-indexed bucket.
    Transitive,
}

/// Mapping from color id to canonical color id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalence {
    canonical: Vec<ColorId>,
}

impl Equivalence {
    /// Identity mapping over `n` color ids.
    pub fn identity(n: usize) -> Self {
        Self {
            canonical: (0..n).collect(),
        }
    }

    /// Number of color ids covered.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Canonical id of `id`, or `None` if `id` is out of range.
    #[inline]
    pub fn get(&self, id: ColorId) -> Option<ColorId> {
        self.canonical.get(id).copied()
    }

    /// The full table, indexed by color id.
    pub fn as_slice(&self) -> &[ColorId] {
        &self.canonical
    }

    /// Distinct canonical ids in ascending order.
    pub fn canonical_ids(&self) -> Vec<ColorId> {
        let mut ids = self.canonical.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Build the color id equivalence table.
///
/// `bucket_ids[i]` is the color id seeded from ranked bucket `i`, if any.
/// Buckets without a color id take no part in merging.
pub fn merge_equivalent(
    buckets: &[HueBucket],
    bucket_ids: &[Option<ColorId>],
    tolerance: u8,
    policy: MergePolicy,
) -> Equivalence {
    let n = bucket_ids.iter().flatten().count();
    let mut eq = Equivalence::identity(n);
    let len = buckets.len().min(bucket_ids.len());

    match policy {
        MergePolicy::NearestEarlier => {
            for i in 0..len {
                let Some(ci) = bucket_ids[i] else { continue };
                let target = (0..=i).find_map(|j| {
                    let cj = bucket_ids[j]?;
                    (hue_distance(buckets[i].hue, buckets[j].hue) <= tolerance).then_some(cj)
                });
                if let Some(cj) = target {
                    if cj != ci {
                        log::debug!("color {} same as color {}", ci, cj);
                    }
                    eq.canonical[ci] = cj;
                }
            }
        }
        MergePolicy::Transitive => {
            let mut uf = UnionFind::new(len);
            for i in 0..len {
                if bucket_ids[i].is_none() {
                    continue;
                }
                for j in 0..i {
                    if bucket_ids[j].is_some()
                        && hue_distance(buckets[i].hue, buckets[j].hue) <= tolerance
                    {
                        uf.union(i, j);
                    }
                }
            }
            for i in 0..len {
                let Some(ci) = bucket_ids[i] else { continue };
                if let Some(root_id) = bucket_ids[uf.find(i)] {
                    if root_id != ci {
                        log::debug!("color {} same as color {}", ci, root_id);
                    }
                    eq.canonical[ci] = root_id;
                }
            }
        }
    }

    eq
}

/// Disjoint sets over bucket indices; the root is always the smallest index.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}
