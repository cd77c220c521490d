//! Testing utilities: deterministic synthetic images and datasets.
//!
//! Used by unit tests and the integration tests under `tests/`; also handy
//! for generating throwaway dataset files for the `evaluate` binary.

use rand::prelude::*;

use crate::data::{Dataset, Image, IMAGE_PIXELS};

/// An image with every pixel at the same intensity.
pub fn constant_image(intensity: u8) -> Image {
    Image::new(vec![intensity; IMAGE_PIXELS]).expect("constant image has the fixed pixel count")
}

/// An all-zero image with one pixel overridden.
pub fn image_with_pixel(pixel: usize, intensity: u8) -> Image {
    image_with_pixels(&[(pixel, intensity)])
}

/// An all-zero image with the given pixels overridden.
pub fn image_with_pixels(overrides: &[(usize, u8)]) -> Image {
    let mut pixels = vec![0u8; IMAGE_PIXELS];
    for &(pixel, intensity) in overrides {
        pixels[pixel] = intensity;
    }
    Image::new(pixels).expect("override image has the fixed pixel count")
}

/// Build a dataset from (image, label) rows.
pub fn dataset_from_rows(rows: &[(Image, u8)]) -> Dataset {
    let images = rows.iter().map(|(image, _)| image.clone()).collect();
    let labels = rows.iter().map(|&(_, label)| label).collect();
    Dataset::new(images, labels).expect("test rows are well-formed")
}

/// Two perfectly separable classes: `per_class` all-zero images labeled 0
/// followed by `per_class` all-255 images labeled 1.
pub fn two_blob_dataset(per_class: usize) -> Dataset {
    let mut rows = Vec::with_capacity(per_class * 2);
    for _ in 0..per_class {
        rows.push((constant_image(0), 0));
    }
    for _ in 0..per_class {
        rows.push((constant_image(255), 1));
    }
    dataset_from_rows(&rows)
}

/// Random binary (0/255) images whose label is a function of three pixels.
///
/// Pixels 0, 1 and 2 encode the label as a 3-bit number (0–7); the rest are
/// independent coin flips. The labels are perfectly separable by pixel
/// tests, so a tree grown to full purity reproduces them exactly.
pub fn random_binary_dataset(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = Vec::with_capacity(rows);
    for _ in 0..rows {
        let pixels: Vec<u8> = (0..IMAGE_PIXELS)
            .map(|_| if rng.gen_bool(0.5) { 255 } else { 0 })
            .collect();
        let bit = |p: usize| u8::from(pixels[p] != 0);
        let label = bit(0) | bit(1) << 1 | bit(2) << 2;
        out.push((
            Image::new(pixels).expect("generated image has the fixed pixel count"),
            label,
        ));
    }
    dataset_from_rows(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_blob_shape() {
        let ds = two_blob_dataset(3);
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.label(0), 0);
        assert_eq!(ds.label(5), 1);
        assert_eq!(ds.image(0).pixel(0), 0);
        assert_eq!(ds.image(5).pixel(0), 255);
    }

    #[test]
    fn random_binary_dataset_is_seeded() {
        let a = random_binary_dataset(10, 42);
        let b = random_binary_dataset(10, 42);
        for i in 0..10 {
            assert_eq!(a.label(i), b.label(i));
            assert_eq!(a.image(i).pixels(), b.image(i).pixels());
        }
    }

    #[test]
    fn random_binary_labels_follow_pixels() {
        let ds = random_binary_dataset(20, 7);
        for i in 0..ds.len() {
            let image = ds.image(i);
            let expected = u8::from(image.pixel(0) != 0)
                | u8::from(image.pixel(1) != 0) << 1
                | u8::from(image.pixel(2) != 0) << 2;
            assert_eq!(ds.label(i), expected);
        }
    }
}
