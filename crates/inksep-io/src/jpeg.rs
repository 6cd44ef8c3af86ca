//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK sources are all returned as 8-bit RGB. Writing is not supported;
//! masks are emitted as PNG or PNM.

use crate::{IoError, IoResult};
use inksep_core::{Rgb, RgbImage};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);

    let pixels: Vec<Rgb> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| Rgb::new(g, g, g)).collect(),
        // Big-endian 16-bit gray; keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|c| Rgb::new(c[0], c[0], c[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => data.chunks_exact(4).map(cmyk_to_rgb).collect(),
    };

    Ok(RgbImage::from_vec(width, height, pixels)?)
}

/// Convert an inverted-CMYK sample as emitted by the decoder to RGB.
fn cmyk_to_rgb(cmyk: &[u8]) -> Rgb {
    let c = 255 - u16::from(cmyk[0]);
    let m = 255 - u16::from(cmyk[1]);
    let y = 255 - u16::from(cmyk[2]);
    let k = 255 - u16::from(cmyk[3]);
    Rgb::new(
        ((c * k) / 255) as u8,
        ((m * k) / 255) as u8,
        ((y * k) / 255) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cmyk_extremes() {
        assert_eq!(cmyk_to_rgb(&[0, 0, 0, 0]), Rgb::new(255, 255, 255));
        assert_eq!(cmyk_to_rgb(&[0, 0, 0, 255]), Rgb::new(0, 0, 0));
        assert_eq!(cmyk_to_rgb(&[255, 0, 0, 0]), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_truncated_stream_fails() {
        let data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00];
        assert!(read_jpeg(Cursor::new(data)).is_err());
    }
}
