//! Raster - Row-major pixel grid
//!
//! `Raster<P>` is the container every pipeline stage reads from or writes
//! into. The pixel type is a small `Copy` value; the decoded RGB input, the
//! HSV working image and the label grid are all rasters.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a single `Vec<P>`
//! - The pixel at `(x, y)` lives at index `y * width + x`
//! - Dimensions are fixed for the lifetime of the raster

use crate::error::{Error, Result};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 8-bit HSV triple.
///
/// Ranges: h [0..179] (half-degrees), s [0..255], v [0..255].
///
/// Hue correspondence:
/// - 0: red
/// - 30: yellow
/// - 60: green
/// - 90: cyan
/// - 120: blue
/// - 150: magenta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Create a new HSV pixel.
    #[inline]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Decoded color input image.
pub type RgbImage = Raster<Rgb>;

/// Working image in hue/saturation/value channels.
pub type HsvImage = Raster<Hsv>;

/// Row-major grid of pixels with fixed dimensions.
///
/// # Examples
///
/// ```
/// use inksep_core::{Hsv, HsvImage};
///
/// let mut img = HsvImage::new(4, 3).unwrap();
/// img.set_pixel(1, 2, Hsv::new(10, 200, 200)).unwrap();
/// assert_eq!(img.get_pixel(1, 2), Some(Hsv::new(10, 200, 200)));
/// assert_eq!(img.get_pixel(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<P> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Copy + Default> Raster<P> {
    /// Create a new raster filled with `P::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_fill(width, height, P::default())
    }
}

impl<P: Copy> Raster<P> {
    /// Create a new raster with every pixel set to `value`.
    pub fn new_fill(width: u32, height: u32, value: P) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether `(x, y)` lies inside the raster.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.data[self.index(x, y)]
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: P) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: P) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.data
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[P] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterate `(x, y, pixel)` in row-major order (rows outer, columns inner).
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, P)> + '_ {
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &p)| ((i as u32) % w, (i as u32) / w, p))
    }

    /// Build a new raster of the same size by mapping every pixel.
    pub fn map<Q: Copy, F: FnMut(P) -> Q>(&self, f: F) -> Raster<Q> {
        Raster {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}
