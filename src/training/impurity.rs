//! Gini impurity of a candidate pixel split.

use crate::data::{Dataset, NUM_CLASSES};

use super::DARK_THRESHOLD;

/// Weighted Gini impurity of splitting `subset` at `pixel`.
///
/// Subset members are partitioned into a dark side (intensity below
/// [`DARK_THRESHOLD`]) and a bright side. Each side contributes its Gini
/// impurity `1 − Σ p_c²` over the ten class frequencies, weighted by side
/// size.
///
/// Returns `None` when either side is empty, which happens exactly when the
/// pixel is constant (all dark or all bright) across the subset. Such a
/// pixel cannot split the subset and must be excluded from split selection.
/// Defined results lie in `[0, 1]`.
pub fn gini_impurity(dataset: &Dataset, subset: &[u32], pixel: usize) -> Option<f64> {
    let mut dark_freq = [0u32; NUM_CLASSES];
    let mut bright_freq = [0u32; NUM_CLASSES];
    let mut dark_count = 0u32;
    let mut bright_count = 0u32;

    for &row in subset {
        let row = row as usize;
        let label = dataset.label(row) as usize;
        if dataset.image(row).pixel(pixel) < DARK_THRESHOLD {
            dark_freq[label] += 1;
            dark_count += 1;
        } else {
            bright_freq[label] += 1;
            bright_count += 1;
        }
    }

    if dark_count == 0 || bright_count == 0 {
        return None;
    }

    let dark_gini = side_gini(&dark_freq, dark_count);
    let bright_gini = side_gini(&bright_freq, bright_count);

    let total = (dark_count + bright_count) as f64;
    Some((dark_gini * dark_count as f64 + bright_gini * bright_count as f64) / total)
}

/// Gini impurity `1 − Σ p_c²` of one non-empty side.
fn side_gini(freq: &[u32; NUM_CLASSES], count: u32) -> f64 {
    let count = count as f64;
    let sum_sq: f64 = freq
        .iter()
        .map(|&f| {
            let p = f as f64 / count;
            p * p
        })
        .sum();
    1.0 - sum_sq
}
