//! Exhaustive greedy split selection.

use rayon::prelude::*;

use crate::data::{Dataset, IMAGE_PIXELS};

use super::impurity::gini_impurity;

/// Find the pixel whose split of `subset` has minimum Gini impurity.
///
/// Every pixel is evaluated; pixels with an undefined impurity (constant
/// over the subset) are skipped. Ties on the minimum resolve to the
/// smallest pixel index, so the result is deterministic regardless of
/// thread count.
///
/// Returns `None` when no pixel produces a defined split, i.e. every pixel
/// is constant across the subset.
pub fn find_best_split(dataset: &Dataset, subset: &[u32]) -> Option<u16> {
    (0..IMAGE_PIXELS)
        .into_par_iter()
        .filter_map(|pixel| gini_impurity(dataset, subset, pixel).map(|score| (score, pixel as u16)))
        .reduce_with(min_by_score)
        .map(|(_, pixel)| pixel)
}

/// Minimum by impurity; equal scores keep the smaller pixel index.
///
/// Associative, so the rayon reduction order cannot change the result.
fn min_by_score(a: (f64, u16), b: (f64, u16)) -> (f64, u16) {
    if b.0 < a.0 || (b.0 == a.0 && b.1 < a.1) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dataset_from_rows, image_with_pixels};

    #[test]
    fn picks_the_cleanest_pixel() {
        // Pixel 5 separates the labels perfectly; pixel 9 splits but mixes
        // labels on the bright side.
        let ds = dataset_from_rows(&[
            (image_with_pixels(&[(5, 0), (9, 0)]), 1),
            (image_with_pixels(&[(5, 0), (9, 255)]), 1),
            (image_with_pixels(&[(5, 255), (9, 255)]), 4),
            (image_with_pixels(&[(5, 255), (9, 255)]), 4),
        ]);
        let subset: Vec<u32> = (0..4).collect();

        assert_eq!(find_best_split(&ds, &subset), Some(5));
    }

    #[test]
    fn tie_resolves_to_smallest_pixel() {
        // Pixels 3 and 7 both split perfectly (impurity 0); every other
        // pixel is constant and therefore undefined.
        let ds = dataset_from_rows(&[
            (image_with_pixels(&[(3, 0), (7, 0)]), 0),
            (image_with_pixels(&[(3, 255), (7, 255)]), 1),
        ]);
        let subset: Vec<u32> = (0..2).collect();

        assert_eq!(find_best_split(&ds, &subset), Some(3));
    }

    #[test]
    fn no_splittable_pixel_returns_none() {
        // Identical images with different labels: every pixel is constant.
        let ds = dataset_from_rows(&[
            (image_with_pixels(&[]), 1),
            (image_with_pixels(&[]), 2),
        ]);
        let subset: Vec<u32> = (0..2).collect();

        assert_eq!(find_best_split(&ds, &subset), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let ds = dataset_from_rows(&[
            (image_with_pixels(&[(100, 0), (200, 255)]), 2),
            (image_with_pixels(&[(100, 255), (200, 0)]), 3),
            (image_with_pixels(&[(100, 255), (200, 255)]), 3),
        ]);
        let subset: Vec<u32> = (0..3).collect();

        let first = find_best_split(&ds, &subset);
        assert!(first.is_some());
        for _ in 0..4 {
            assert_eq!(find_best_split(&ds, &subset), first);
        }
    }
}
