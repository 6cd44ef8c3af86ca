//! Gap bridging
//!
//! Thin strokes broken by cleanup leave a column with set pixels followed
//! by columns without. The scan walks the mask column by column (top to
//! bottom inside each column) and remembers an anchor: the latest set
//! pixel in a column whose left neighbor column also had set pixels. A set
//! pixel in a column whose left neighbor column was empty is the far end
//! of a gap and is paired with the current anchor.
//!
//! Column 0 is never marked, so ink in column 0 never turns column 1 into
//! an anchor column.
//!
//! Segments are collected first and drawn afterwards, so bridges do not
//! influence the scan.

use inksep_core::{Mask, Pta, generate_line_pta};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// How a gap segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeMode {
    /// 1-pixel Bresenham line between the endpoints
    #[default]
    StraightLine,
    /// Shortest 8-connected path inside a window of `radius` around the
    /// start, never moving left; falls back to a straight line if the end
    /// is out of reach
    ShortestPath {
        /// Half-size of the search window
        radius: u32,
    },
}

/// Options for gap bridging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeOptions {
    /// Longest gap bridged, as squared Euclidean distance
    pub max_distance_sq: u64,
    /// How bridges are drawn
    pub mode: BridgeMode,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            max_distance_sq: 5000,
            mode: BridgeMode::StraightLine,
        }
    }
}

impl BridgeOptions {
    /// Set the distance bound
    pub fn with_max_distance_sq(mut self, d: u64) -> Self {
        self.max_distance_sq = d;
        self
    }

    /// Set the drawing mode
    pub fn with_mode(mut self, mode: BridgeMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A detected gap: `from` is the anchor, `to` the pixel after the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapSegment {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

impl GapSegment {
    /// Squared Euclidean length.
    pub fn distance_sq(&self) -> u64 {
        let dx = u64::from(self.from.0.abs_diff(self.to.0));
        let dy = u64::from(self.from.1.abs_diff(self.to.1));
        dx * dx + dy * dy
    }
}

/// Find gap segments in column-major order.
pub fn find_gap_segments(mask: &Mask) -> Vec<GapSegment> {
    let (w, h) = mask.dimensions();
    let mut col_has_ink = vec![false; w as usize];
    let mut anchor: Option<(u32, u32)> = None;
    let mut segments = Vec::new();

    for x in 1..w {
        for y in 0..h {
            if !mask.get(x, y) {
                continue;
            }
            col_has_ink[x as usize] = true;
            if col_has_ink[x as usize - 1] {
                anchor = Some((x, y));
            } else if let Some(from) = anchor {
                segments.push(GapSegment { from, to: (x, y) });
            }
        }
    }

    segments
}

/// Bridge every gap within the distance bound.
///
/// Segments longer than the bound are left open.
pub fn bridge_gaps(mask: &Mask, options: &BridgeOptions) -> Mask {
    let mut out = mask.clone();
    let segments = find_gap_segments(mask);
    let mut drawn = 0;

    for seg in &segments {
        let d = seg.distance_sq();
        if d > options.max_distance_sq {
            log::debug!(
                "gap {:?} -> {:?} too long ({} > {}), skipped",
                seg.from,
                seg.to,
                d,
                options.max_distance_sq
            );
            continue;
        }
        let path = match options.mode {
            BridgeMode::StraightLine => straight_line(seg),
            BridgeMode::ShortestPath { radius } => {
                shortest_path(mask.dimensions(), seg, radius).unwrap_or_else(|| {
                    log::debug!("no path for gap {:?} -> {:?}, using line", seg.from, seg.to);
                    straight_line(seg)
                })
            }
        };
        out.render_pta(&path);
        drawn += 1;
    }

    log::trace!("bridged {} of {} gaps", drawn, segments.len());
    out
}

fn straight_line(seg: &GapSegment) -> Pta {
    generate_line_pta(
        seg.from.0 as i32,
        seg.from.1 as i32,
        seg.to.0 as i32,
        seg.to.1 as i32,
    )
}

/// Uniform-cost search from `seg.from` to `seg.to`.
///
/// Steps are 8-connected with unit cost, stay within `radius` of the start
/// on both axes and never decrease x. Returns the path including both
/// endpoints, or `None` if the end is unreachable.
fn shortest_path((w, h): (u32, u32), seg: &GapSegment, radius: u32) -> Option<Pta> {
    const STEPS: [(i64, i64); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    let start = seg.from;
    let goal = seg.to;
    let mut dist: HashMap<(u32, u32), u32> = HashMap::new();
    let mut parent: HashMap<(u32, u32), (u32, u32)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0);
    heap.push(Reverse((0u32, start.1, start.0)));

    while let Some(Reverse((d, y, x))) = heap.pop() {
        if (x, y) == goal {
            break;
        }
        if dist.get(&(x, y)).is_some_and(|&best| d > best) {
            continue;
        }
        for (dx, dy) in STEPS {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < x as i64 || nx >= w as i64 || ny < 0 || ny >= h as i64 {
                continue;
            }
            if (nx - start.0 as i64).unsigned_abs() > u64::from(radius)
                || (ny - start.1 as i64).unsigned_abs() > u64::from(radius)
            {
                continue;
            }
            let next = (nx as u32, ny as u32);
            let nd = d + 1;
            if dist.get(&next).is_none_or(|&best| nd < best) {
                dist.insert(next, nd);
                parent.insert(next, (x, y));
                heap.push(Reverse((nd, next.1, next.0)));
            }
        }
    }

    if goal != start && !parent.contains_key(&goal) {
        return None;
    }

    let mut rev = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = *parent.get(&cur)?;
        rev.push(cur);
    }
    Some(
        rev.into_iter()
            .rev()
            .map(|(x, y)| (x as i32, y as i32))
            .collect(),
    )
}
