//! Image and dataset representation plus dataset file I/O.
//!
//! [`Dataset`] is the canonical input for training and evaluation: an ordered
//! collection of fixed-size grayscale [`Image`]s with one label per image.
//! [`read_dataset`] loads the binary file format described in [`io`].

mod dataset;
pub mod io;

pub use dataset::{Dataset, DatasetError, Image, IMAGE_PIXELS, IMAGE_WIDTH, NUM_CLASSES};
pub use io::{
    read_dataset, read_dataset_from, write_dataset, write_dataset_to_path, DatasetLoadError,
};
