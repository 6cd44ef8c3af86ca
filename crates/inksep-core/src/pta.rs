//! Pta - Integer point arrays
//!
//! Used to describe the pixels of rendered bridge lines and paths.

/// Array of integer points `(x, y)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pta {
    points: Vec<(i32, i32)>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<(i32, i32)> {
        self.points.get(index).copied()
    }

    /// Append a point.
    #[inline]
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push((x, y));
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<(i32, i32)> for Pta {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Generate a point array for a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity and is
/// one pixel wide. Both endpoints are included.
pub fn generate_line_pta(x1: i32, y1: i32, x2: i32, y2: i32) -> Pta {
    if x1 == x2 && y1 == y2 {
        let mut pta = Pta::with_capacity(1);
        pta.push(x1, y1);
        return pta;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pta = Pta::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        // Step along x
        let mut err = dx / 2;
        for _ in 0..npts {
            pta.push(x, y);
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        // Step along y
        let mut err = dy / 2;
        for _ in 0..npts {
            pta.push(x, y);
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pta
}
