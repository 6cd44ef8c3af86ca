//! I/O regression test
//!
//! Writes masks and pages to disk in every writable format and reads them
//! back through format detection.

use inksep_core::Rgb;
use inksep_io::{
    ImageFormat, IoError, detect_format, read_image, read_image_mem, write_mask, write_rgb_png,
};
use inksep_test::{RegParams, mask_from_ascii, sample_page};
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("inksep_io_reg_{}_{}", std::process::id(), name))
}

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");

    let mask = mask_from_ascii(&["#..#", ".##.", "#..#"]).unwrap();

    // ================================================================
    // Masks round-trip as 0/255 gray through PNG and PGM
    // ================================================================
    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = scratch(&format!("mask.{}", format.extension()));
        write_mask(&mask, &path, format).unwrap();

        rp.check(detect_format(&path).unwrap() == format, "format detected");
        let img = read_image(&path).unwrap();
        rp.check(img.dimensions() == (4, 3), "dimensions survive");
        for (x, y, px) in img.enumerate_pixels() {
            let expected = if mask.get(x, y) { 255 } else { 0 };
            rp.check(
                px == Rgb::new(expected, expected, expected),
                "mask pixel survives",
            );
        }
        let _ = std::fs::remove_file(&path);
    }

    // ================================================================
    // RGB pages round-trip through PNG
    // ================================================================
    let page = sample_page().unwrap();
    let path = scratch("page.png");
    write_rgb_png(&page, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.check(back == page, "page survives");
    let _ = std::fs::remove_file(&path);

    // ================================================================
    // Masks cannot be written as JPEG, and no file is left behind
    // ================================================================
    let path = scratch("mask.jpg");
    rp.check(
        matches!(
            write_mask(&mask, &path, ImageFormat::Jpeg),
            Err(IoError::UnsupportedFormat(_))
        ),
        "jpeg mask rejected",
    );
    rp.check(!path.exists(), "rejected write creates no file");

    // ================================================================
    // PNM headers claiming huge rasters are decode errors
    // ================================================================
    for header in [
        &b"P6 4294967295 4294967295 255\n\0\0\0"[..],
        &b"P6 100000 100000 255\n\0\0\0"[..],
        &b"P5 65536 65536 255\n\0"[..],
    ] {
        rp.check(
            matches!(read_image_mem(header), Err(IoError::InvalidData(_))),
            "oversized PNM header rejected",
        );
    }

    assert!(rp.cleanup());
}
