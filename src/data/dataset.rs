//! In-memory image store.

/// Side length of every image, in pixels.
///
/// The dataset file format does not record image dimensions; producer and
/// consumer agree on this constant out of band.
pub const IMAGE_WIDTH: usize = 28;

/// Number of pixels per image.
pub const IMAGE_PIXELS: usize = IMAGE_WIDTH * IMAGE_WIDTH;

/// Number of label classes (digits 0 through 9).
pub const NUM_CLASSES: usize = 10;

/// Dataset construction/validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("image has {got} pixels, expected {expected}")]
    BadImageSize { expected: usize, got: usize },

    #[error("number of labels ({labels}) does not match number of images ({images})")]
    LabelLenMismatch { images: usize, labels: usize },

    #[error("label {label} at index {index} is out of range (0-9)")]
    InvalidLabel { index: usize, label: u8 },
}

/// A single grayscale image: `IMAGE_WIDTH × IMAGE_WIDTH` intensities in
/// row-major order, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pixels: Box<[u8]>,
}

impl Image {
    /// Create an image from raw row-major pixel intensities.
    pub fn new(pixels: Vec<u8>) -> Result<Self, DatasetError> {
        if pixels.len() != IMAGE_PIXELS {
            return Err(DatasetError::BadImageSize {
                expected: IMAGE_PIXELS,
                got: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Side length in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        IMAGE_WIDTH
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Intensity at a flat row-major pixel index.
    #[inline]
    pub fn pixel(&self, index: usize) -> u8 {
        self.pixels[index]
    }

    /// All pixel intensities in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// An ordered collection of (image, label) pairs.
///
/// Images and labels are parallel arrays of equal length; every label is
/// below [`NUM_CLASSES`]. Both invariants are enforced at construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    images: Vec<Image>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Create a dataset from parallel image and label arrays.
    pub fn new(images: Vec<Image>, labels: Vec<u8>) -> Result<Self, DatasetError> {
        if images.len() != labels.len() {
            return Err(DatasetError::LabelLenMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        for (index, &label) in labels.iter().enumerate() {
            if label as usize >= NUM_CLASSES {
                return Err(DatasetError::InvalidLabel { index, label });
            }
        }
        Ok(Self { images, labels })
    }

    /// Number of (image, label) pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at a dataset row index.
    #[inline]
    pub fn image(&self, index: usize) -> &Image {
        &self.images[index]
    }

    /// Label at a dataset row index.
    #[inline]
    pub fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }

    /// All labels, parallel to the image array.
    #[inline]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }
}
