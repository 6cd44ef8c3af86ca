//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P5 binary) and PPM (P6 binary) with a maximum sample value
//! of at most 255, and writes masks as P5. ASCII variants are not
//! supported.

use crate::{IoError, IoResult};
use inksep_core::{Mask, Rgb, RgbImage};
use std::io::{BufRead, Read, Write};

/// Read a PNM image (P5/P6) from a reader.
///
/// Samples are rescaled to 0..=255 when the header's maxval is smaller.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<RgbImage> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {}",
                other
            )));
        }
    };

    let width = parse_header_value(&read_token(&mut reader)?, "width")?;
    let height = parse_header_value(&read_token(&mut reader)?, "height")?;
    let maxval = parse_header_value(&read_token(&mut reader)?, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} not supported (1..=255)",
            maxval
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM size {}x{} overflows", width, height))
        })?;

    // Grow with the bytes actually present rather than trusting the header
    let mut data = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut data)?;
    if data.len() != len {
        return Err(IoError::InvalidData(format!(
            "truncated PNM raster: expected {} bytes, found {}",
            len,
            data.len()
        )));
    }

    let scale = |v: u8| -> u8 {
        if maxval == 255 {
            v
        } else {
            ((u32::from(v.min(maxval as u8)) * 255 + maxval / 2) / maxval) as u8
        }
    };

    let pixels: Vec<Rgb> = if channels == 1 {
        data.iter()
            .map(|&g| {
                let g = scale(g);
                Rgb::new(g, g, g)
            })
            .collect()
    } else {
        data.chunks_exact(3)
            .map(|c| Rgb::new(scale(c[0]), scale(c[1]), scale(c[2])))
            .collect()
    };

    Ok(RgbImage::from_vec(width, height, pixels)?)
}

/// Write a mask as a binary PGM (P5) with values 0 and 255.
pub fn write_pnm_mask<W: Write>(mask: &Mask, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", mask.width(), mask.height())?;
    writer.write_all(&mask.to_gray())?;
    writer.flush()?;
    Ok(())
}

fn parse_header_value(token: &str, field: &str) -> IoResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {}: {:?}", field, token)))
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token so the raster
/// starts right after the maxval.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PNM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if in_comment {
            if c == b'\n' || c == b'\r' {
                in_comment = false;
            }
            continue;
        }
        if c == b'#' {
            in_comment = true;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            return Ok(token);
        }
        token.push(c as char);
    }
}
