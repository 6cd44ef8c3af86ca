//! Label visualization

use inksep_core::{LabelGrid, Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Paint each color id with a random color; unlabeled pixels stay black.
///
/// The palette is drawn from a generator seeded with `seed`, so the same
/// grid and seed always render identically.
pub fn render_labels(labels: &LabelGrid, seed: u64) -> RgbImage {
    let n = labels.max_label().map_or(0, |m| m + 1);
    let mut rng = StdRng::seed_from_u64(seed);
    let palette: Vec<Rgb> = (0..n)
        .map(|_| {
            Rgb::new(
                rng.random_range(32..=255),
                rng.random_range(32..=255),
                rng.random_range(32..=255),
            )
        })
        .collect();

    labels.map(|label| label.map_or(Rgb::default(), |id| palette[id]))
}
