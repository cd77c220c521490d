//! Recursive tree growth.

use crate::data::{Dataset, NUM_CLASSES};
use crate::tree::{DecisionTree, Node};

use super::logger::{TrainingLogger, Verbosity};
use super::partition::partition;
use super::split::find_best_split;

/// Parameters for tree growth.
#[derive(Debug, Clone)]
pub struct GrowerParams {
    /// A node becomes a leaf when its majority label covers at least this
    /// fraction of the node's images.
    pub threshold_ratio: f64,
    /// Verbosity for growth logging.
    pub verbosity: Verbosity,
}

impl Default for GrowerParams {
    fn default() -> Self {
        Self {
            threshold_ratio: 0.95,
            verbosity: Verbosity::Silent,
        }
    }
}

impl GrowerParams {
    /// Builder: set the leaf purity threshold.
    pub fn with_threshold_ratio(mut self, threshold_ratio: f64) -> Self {
        self.threshold_ratio = threshold_ratio;
        self
    }

    /// Builder: set logging verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Counters reported once a tree finishes growing.
#[derive(Debug, Default)]
struct GrowthStats {
    nodes: usize,
    leaves: usize,
    forced_leaves: usize,
    max_depth: usize,
}

/// Grows a decision tree by recursive greedy partitioning.
#[derive(Debug, Clone, Default)]
pub struct TreeGrower {
    params: GrowerParams,
}

impl TreeGrower {
    pub fn new(params: GrowerParams) -> Self {
        Self { params }
    }

    /// Grow a tree from every image in the dataset.
    ///
    /// The dataset is read-only throughout; the returned tree is owned by
    /// the caller and independent of the dataset's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the dataset is empty. Training on nothing is a caller bug,
    /// not a recoverable condition.
    pub fn grow(&self, dataset: &Dataset) -> DecisionTree {
        assert!(!dataset.is_empty(), "cannot grow a tree from an empty dataset");

        let logger = TrainingLogger::new(self.params.verbosity);
        let subset: Vec<u32> = (0..dataset.len() as u32).collect();

        let mut stats = GrowthStats::default();
        let root = self.grow_node(dataset, &subset, 0, &logger, &mut stats);

        logger.info(&format!(
            "grew tree: {} nodes, {} leaves ({} forced), depth {}",
            stats.nodes, stats.leaves, stats.forced_leaves, stats.max_depth
        ));

        DecisionTree::new(root)
    }

    fn grow_node(
        &self,
        dataset: &Dataset,
        subset: &[u32],
        depth: usize,
        logger: &TrainingLogger,
        stats: &mut GrowthStats,
    ) -> Node {
        debug_assert!(!subset.is_empty(), "recursed into an empty subset");
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        let (label, freq) = most_frequent_label(dataset, subset);

        // A singleton subset always satisfies the ratio, so recursion
        // terminates even with threshold_ratio = 1.0.
        if freq as f64 / subset.len() as f64 >= self.params.threshold_ratio {
            stats.leaves += 1;
            return Node::leaf(label);
        }

        let Some(pixel) = find_best_split(dataset, subset) else {
            // Impure node, but every pixel is constant over its images:
            // nothing can split it further. Fall back to a majority leaf.
            stats.leaves += 1;
            stats.forced_leaves += 1;
            logger.debug(&format!(
                "depth {depth}: no splittable pixel over {} rows, forcing leaf {label}",
                subset.len()
            ));
            return Node::leaf(label);
        };

        logger.debug(&format!(
            "depth {depth}: splitting {} rows on pixel {pixel}",
            subset.len()
        ));

        let (left_rows, right_rows) = partition(dataset, subset, pixel as usize);
        let left = self.grow_node(dataset, &left_rows, depth + 1, logger, stats);
        let right = self.grow_node(dataset, &right_rows, depth + 1, logger, stats);

        Node::split(pixel, left, right)
    }
}

/// Most frequent label in the subset and its count.
///
/// Ties on the count resolve to the numerically smallest label.
fn most_frequent_label(dataset: &Dataset, subset: &[u32]) -> (u8, u32) {
    let mut freq = [0u32; NUM_CLASSES];
    for &row in subset {
        freq[dataset.label(row as usize) as usize] += 1;
    }

    let mut best = (0u8, freq[0]);
    for (label, &count) in freq.iter().enumerate().skip(1) {
        if count > best.1 {
            best = (label as u8, count);
        }
    }
    best
}
