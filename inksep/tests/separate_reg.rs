//! Separation regression test
//!
//! Runs the full pipeline on synthetic line-art pages and checks which
//! masks come out, under which names, and with which pixels.

use inksep::io::ImageFormat;
use inksep::region::MergePolicy;
use inksep::{
    DisplaySink, Mask, Rgb, SeparateOptions, separate_rgb, show_separation, write_separation,
};
use inksep_test::{PageBuilder, RED, RegParams, sample_page};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Hues 20, 8 and 0 on the half-degree scale
const HUE_20: Rgb = Rgb::new(220, 157, 30);
const HUE_8: Rgb = Rgb::new(220, 81, 30);

#[test]
fn separate_reg() {
    init_logger();
    let mut rp = RegParams::new("separate");

    // ================================================================
    // Sample page: red and blue squares kept, green speck dropped
    // ================================================================
    let page = sample_page().unwrap();
    let sep = separate_rgb(&page, &SeparateOptions::default()).unwrap();

    rp.compare_values(3.0, sep.color_count() as f64, 0.0);
    rp.check(sep.names() == vec!["a", "b"], "names are a, b");

    let red = sep.get("a").unwrap();
    let blue = sep.get("b").unwrap();
    rp.compare_values(900.0, red.pixel_count as f64, 0.0);
    rp.compare_values(900.0, blue.pixel_count as f64, 0.0);
    rp.check(red.mask.get(25, 25), "red center set");
    rp.check(!red.mask.get(75, 25), "blue center not in red");
    rp.check(blue.mask.get(75, 25), "blue center set");
    rp.check(!red.mask.get(12, 62), "green speck absent");
    rp.check(
        (800..=1100).contains(&red.mask.count()),
        "cleanup keeps the square",
    );
    rp.write_mask(&red.mask, "a").unwrap();
    rp.write_mask(&blue.mask, "b").unwrap();

    // ================================================================
    // Lower size limit lets the green speck through as "c"
    // ================================================================
    let opts = SeparateOptions::default().with_min_region_size(50);
    let sep = separate_rgb(&page, &opts).unwrap();
    rp.check(sep.names() == vec!["a", "b", "c"], "names are a, b, c");
    let green = sep.get("c").unwrap();
    rp.compare_values(64.0, green.pixel_count as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn separate_deterministic_reg() {
    init_logger();
    let mut rp = RegParams::new("separate_deterministic");

    let page = sample_page().unwrap();
    let a = separate_rgb(&page, &SeparateOptions::default()).unwrap();
    let b = separate_rgb(&page, &SeparateOptions::default()).unwrap();

    rp.check(a.names() == b.names(), "same names");
    for (ma, mb) in a.masks.iter().zip(&b.masks) {
        rp.compare_masks(&ma.mask, &mb.mask);
    }
    rp.check(a.labels == b.labels, "same labels");

    assert!(rp.cleanup());
}

#[test]
fn separate_letter_skip_reg() {
    init_logger();
    let mut rp = RegParams::new("separate_letter_skip");

    // Ranked buckets are [20, 8, 0]. The hue-0 square is scanned first;
    // hue 0 is 20 away from bucket 20 but 8 from bucket 8, so it seeds
    // bucket 8 as color 0. The hue-20 and hue-8 squares both match bucket
    // 20 and become color 1. Merging maps bucket 8 onto bucket 20, so only
    // color 1 remains and the single output is named "b".
    let page = PageBuilder::new(120, 80)
        .unwrap()
        .fill_rect(5, 5, 15, 15, RED)
        .fill_rect(30, 30, 30, 30, HUE_20)
        .fill_rect(80, 30, 20, 20, HUE_8)
        .build();

    for policy in [MergePolicy::NearestEarlier, MergePolicy::Transitive] {
        let opts = SeparateOptions::default().with_merge_policy(policy);
        let sep = separate_rgb(&page, &opts).unwrap();

        let hues: Vec<u8> = sep.buckets.iter().map(|b| b.hue).collect();
        rp.check(hues == vec![20, 8, 0], "bucket ranking");
        rp.compare_values(2.0, sep.color_count() as f64, 0.0);
        rp.check(sep.names() == vec!["b"], "only b is emitted");

        let b = sep.get("b").unwrap();
        rp.compare_values(225.0 + 900.0 + 400.0, b.pixel_count as f64, 0.0);
        rp.check(b.mask.get(12, 12), "hue-0 square merged into b");
    }

    assert!(rp.cleanup());
}

#[test]
fn separate_write_reg() {
    init_logger();
    let mut rp = RegParams::new("separate_write");

    let page = sample_page().unwrap();
    let sep = separate_rgb(&page, &SeparateOptions::default()).unwrap();

    let dir = std::env::temp_dir().join(format!("inksep_separate_write_{}", std::process::id()));
    let paths = write_separation(&sep, &dir, ImageFormat::Png).unwrap();
    rp.compare_values(2.0, paths.len() as f64, 0.0);
    rp.check(paths[0].ends_with("a.png"), "first file is a.png");
    rp.check(paths[1].ends_with("b.png"), "second file is b.png");

    for (path, m) in paths.iter().zip(&sep.masks) {
        let img = inksep::io::read_image(path).unwrap();
        let white = img.data().iter().filter(|p| p.r == 255).count();
        rp.compare_values(m.mask.count() as f64, white as f64, 0.0);
    }
    let _ = std::fs::remove_dir_all(&dir);

    assert!(rp.cleanup());
}

struct Recorder(Vec<(String, usize)>);

impl DisplaySink for Recorder {
    fn show(&mut self, name: &str, mask: &Mask) {
        self.0.push((name.to_string(), mask.count()));
    }
}

#[test]
fn separate_display_reg() {
    init_logger();
    let mut rp = RegParams::new("separate_display");

    let page = sample_page().unwrap();
    let sep = separate_rgb(&page, &SeparateOptions::default()).unwrap();

    let mut rec = Recorder(Vec::new());
    show_separation(&sep, &mut rec);
    let names: Vec<&str> = rec.0.iter().map(|(n, _)| n.as_str()).collect();
    rp.check(names == vec!["a", "b"], "sink sees masks in order");
    rp.compare_values(sep.masks[0].mask.count() as f64, rec.0[0].1 as f64, 0.0);

    assert!(rp.cleanup());
}
