//! Row partitioning for tree building.

use crate::data::Dataset;

use super::DARK_THRESHOLD;

/// Split a node's row indices into dark-side and bright-side children.
///
/// Each row goes left when its intensity at `pixel` is below
/// [`DARK_THRESHOLD`], right otherwise. The split is lossless and stable:
/// every input index lands in exactly one output, in its original order.
///
/// Both outputs are non-empty whenever `pixel` came from
/// [`super::find_best_split`], since undefined (one-sided) splits are never
/// selected there.
pub fn partition(dataset: &Dataset, subset: &[u32], pixel: usize) -> (Vec<u32>, Vec<u32>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &row in subset {
        if dataset.image(row as usize).pixel(pixel) < DARK_THRESHOLD {
            left.push(row);
        } else {
            right.push(row);
        }
    }
    (left, right)
}
