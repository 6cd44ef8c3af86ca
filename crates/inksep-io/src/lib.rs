//! inksep-io - Image I/O for color separation
//!
//! Decodes the input raster and encodes the separated masks:
//!
//! - **PNG** (`png-format` feature): read gray/RGB/RGBA/indexed, write masks
//! - **JPEG** (`jpeg` feature): read gray/RGB/CMYK
//! - **PNM** (`pnm` feature): read P5/P6, write masks as P5
//!
//! Formats are detected from magic numbers, never from the file name.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use inksep_core::{Mask, RgbImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file path as 8-bit RGB.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened, or a decode /
/// unsupported-format error if its contents cannot be interpreted.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from an in-memory buffer as 8-bit RGB.
pub fn read_image_mem(data: &[u8]) -> IoResult<RgbImage> {
    let format = detect_format_from_bytes(data)?;
    let reader = BufReader::new(Cursor::new(data));
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} input is not supported",
            other
        ))),
    }
}

/// Write a mask to a file as a single-channel 0/255 raster.
///
/// Unsupported formats are rejected before the file is created.
pub fn write_mask<P: AsRef<Path>>(mask: &Mask, path: P, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png_mask(mask, create_writer(path)?),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm_mask(mask, create_writer(path)?),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write masks as {:?}",
            other
        ))),
    }
}

/// Write an RGB image to a file as PNG.
#[cfg(feature = "png-format")]
pub fn write_rgb_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> IoResult<()> {
    png::write_png_rgb(image, create_writer(path)?)
}

fn create_writer<P: AsRef<Path>>(path: P) -> IoResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
