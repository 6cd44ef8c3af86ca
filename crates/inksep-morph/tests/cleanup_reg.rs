//! Cleanup regression test
//!
//! Runs the default cleanup on broken strokes and checks that short gaps
//! are bridged and long ones are left open.

use inksep_morph::{
    BridgeMode, BridgeOptions, MorphSequence, bridge_gaps, dilate, erode, find_gap_segments,
    morph_sequence, remove_isolated,
};
use inksep_test::{RegParams, mask_from_ascii, rect_mask};

fn broken_stroke(width: u32, gap_start: u32, gap_end: u32) -> inksep_core::Mask {
    let mut m = rect_mask(width, 30, 5, 10, gap_start - 5, 6).unwrap();
    for y in 10..16 {
        for x in gap_end..width - 5 {
            m.set(x, y);
        }
    }
    m
}

#[test]
fn cleanup_reg() {
    let mut rp = RegParams::new("cleanup");
    let bridge = BridgeOptions::default();

    // ================================================================
    // Short gap is bridged by the default sequence
    // ================================================================
    let m = broken_stroke(80, 30, 40);
    let cleaned = MorphSequence::default().apply(&m, &bridge);
    rp.check((0..30).any(|y| cleaned.get(35, y)), "gap column bridged");

    let no_bridge = morph_sequence(&m, "e5 + d2 + e5", &bridge).unwrap();
    rp.check((0..30).all(|y| !no_bridge.get(35, y)), "gap open without g");

    let manual = bridge_gaps(&erode(&dilate(&erode(&m))), &bridge);
    rp.compare_masks(&manual, &cleaned);
    rp.write_mask(&cleaned, "short").unwrap();

    // ================================================================
    // Long gap stays open
    // ================================================================
    let m = broken_stroke(200, 40, 120);
    let segs = find_gap_segments(&m);
    rp.check(!segs.is_empty(), "gap detected");
    rp.check(segs.iter().all(|s| s.distance_sq() > 5000), "gap too long");
    let cleaned = MorphSequence::default().apply(&m, &bridge);
    rp.check((0..30).all(|y| !cleaned.get(80, y)), "long gap open");
    rp.write_mask(&cleaned, "long").unwrap();

    // ================================================================
    // Shortest-path bridging also closes the short gap
    // ================================================================
    let m = broken_stroke(80, 30, 40);
    let sp = BridgeOptions::default().with_mode(BridgeMode::ShortestPath { radius: 50 });
    let cleaned = MorphSequence::default().apply(&m, &sp);
    rp.check((0..30).any(|y| cleaned.get(35, y)), "path crosses gap");

    // ================================================================
    // Speckle removal
    // ================================================================
    let speckled = mask_from_ascii(&["#.......", "..####..", "..####..", "..####.#"]).unwrap();
    let clean = remove_isolated(&speckled);
    rp.check(!clean.get(0, 0), "corner speck removed");
    rp.check(!clean.get(7, 3), "edge speck removed");
    rp.compare_values(12.0, clean.count() as f64, 0.0);
    let via_seq = morph_sequence(&speckled, "i2", &bridge).unwrap();
    rp.compare_masks(&clean, &via_seq);

    assert!(rp.cleanup());
}
