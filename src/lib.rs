//! pixeltree: decision tree classification of fixed-size grayscale images.
//!
//! This crate trains a single binary decision tree on a labeled set of
//! fixed-size grayscale images (28×28, ten classes) and classifies unseen
//! images with it. Splits test one pixel at a time: training partitions a
//! node's images by whether the pixel is dark or bright, picking the pixel
//! whose partition minimizes Gini impurity.
//!
//! # Example
//!
//! ```ignore
//! use pixeltree::data::read_dataset;
//! use pixeltree::training::TreeGrower;
//!
//! let train = read_dataset("train.bin")?;
//! let test = read_dataset("test.bin")?;
//!
//! let tree = TreeGrower::default().grow(&train);
//! for i in 0..test.len() {
//!     let predicted = tree.classify(test.image(i));
//!     println!("{predicted} (actual {})", test.label(i));
//! }
//! ```

pub mod data;
pub mod metrics;
pub mod testing;
pub mod training;
pub mod tree;

pub use data::{read_dataset, Dataset, Image, IMAGE_PIXELS, IMAGE_WIDTH, NUM_CLASSES};
pub use training::{GrowerParams, TreeGrower};
pub use tree::{DecisionTree, Node};
