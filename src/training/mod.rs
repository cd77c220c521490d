//! Tree induction.
//!
//! Training grows a binary tree by recursive greedy partitioning:
//!
//! 1. Tally the labels of the images at the current node.
//! 2. If the majority label is frequent enough, emit a leaf.
//! 3. Otherwise scan every pixel for the split with minimum Gini impurity,
//!    partition the node's images into dark and bright sides, and recurse.
//!
//! The working set at each node is a list of dataset row indices; image
//! data is never copied during training.

mod grower;
mod impurity;
mod logger;
mod partition;
mod split;

pub use grower::{GrowerParams, TreeGrower};
pub use impurity::gini_impurity;
pub use logger::{TrainingLogger, Verbosity};
pub use partition::partition;
pub use split::find_best_split;

/// Pixel intensities below this value count as dark during training.
///
/// Dark pixels send an image to the left side of a split, bright pixels to
/// the right.
pub const DARK_THRESHOLD: u8 = 128;
