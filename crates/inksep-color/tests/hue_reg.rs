//! Hue classification regression test
//!
//! Classifies the synthetic sample page and checks the background split and
//! the ranked hue buckets.

use inksep_color::{
    ClassifierThresholds, HueHistogram, PixelClass, convert_rgb_to_hsv, find_bucket, rank_hues,
};
use inksep_test::{RegParams, sample_page};

#[test]
fn hue_reg() {
    let mut rp = RegParams::new("hue");

    let page = sample_page().unwrap();
    let hsv = convert_rgb_to_hsv(&page);
    let t = ClassifierThresholds::default();

    // ================================================================
    // Background split: paper, outlines, ink
    // ================================================================
    let (mut white, mut black, mut ink) = (0, 0, 0);
    for &px in hsv.data() {
        match t.classify(px) {
            PixelClass::BackgroundWhite => white += 1,
            PixelClass::BackgroundBlack => black += 1,
            PixelClass::Chromatic(_) => ink += 1,
        }
    }
    rp.compare_values(7488.0, white as f64, 0.0);
    rp.compare_values(248.0, black as f64, 0.0);
    rp.compare_values(1864.0, ink as f64, 0.0);

    // ================================================================
    // Ranking: equal counts order by hue descending
    // ================================================================
    let ranked = rank_hues(&hsv, &t);
    let hues: Vec<u8> = ranked.iter().map(|b| b.hue).collect();
    rp.check(hues == vec![115, 0, 64], "blue, red, green");
    rp.compare_values(900.0, ranked[0].count as f64, 0.0);
    rp.compare_values(64.0, ranked[2].count as f64, 0.0);

    let hist = HueHistogram::from_image(&hsv, &t);
    rp.compare_values(1864.0, hist.total() as f64, 0.0);
    rp.compare_values(3.0, hist.distinct() as f64, 0.0);

    // ================================================================
    // Bucket lookup
    // ================================================================
    rp.check(find_bucket(&ranked, 10, 15) == Some(1), "hue 10 -> red");
    rp.check(find_bucket(&ranked, 100, 15) == Some(0), "hue 100 -> blue");
    rp.check(find_bucket(&ranked, 150, 15).is_none(), "hue 150 unmatched");

    assert!(rp.cleanup());
}
