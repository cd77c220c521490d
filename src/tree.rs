//! Decision tree storage and classification traversal.
//!
//! A tree is an owning recursive structure: every split node exclusively
//! owns its two children, and the [`DecisionTree`] owns the root. There is
//! no sharing between nodes, so the whole tree is released when the owner
//! drops it. Once built, a tree is immutable and safe to share read-only
//! across threads.

use crate::data::Image;

/// A node in a decision tree.
///
/// Leaves and splits are distinct variants; a node is never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding the predicted label.
    Leaf { label: u8 },
    /// Internal node testing one pixel, with exactly two children.
    Split {
        pixel: u16,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(label: u8) -> Self {
        Self::Leaf { label }
    }

    /// Create a split node.
    pub fn split(pixel: u16, left: Node, right: Node) -> Self {
        Self::Split {
            pixel,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true if this is a leaf node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// An immutable trained decision tree.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Wrap a built root node.
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Traverse the tree and return the predicted label for an image.
    ///
    /// At a split node, a pixel intensity of exactly 0 descends left; any
    /// non-zero intensity descends right. Read-only and allocation-free.
    pub fn classify(&self, image: &Image) -> u8 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split { pixel, left, right } => {
                    node = if image.pixel(*pixel as usize) == 0 {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    /// Total number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.walk().count()
    }

    /// Number of leaf nodes.
    pub fn num_leaves(&self) -> usize {
        self.walk().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Depth of the deepest node (root = 0).
    pub fn depth(&self) -> usize {
        self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    /// Iterate over all nodes with their depths, pre-order.
    fn walk(&self) -> impl Iterator<Item = (&Node, usize)> + '_ {
        let mut stack = vec![(&self.root, 0usize)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Node::Split { left, right, .. } = node {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}

impl Drop for DecisionTree {
    // The derived drop recurses once per tree level; unbalanced trees from
    // hard datasets can get deep enough to exhaust the stack. Detach
    // children onto an explicit worklist instead.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(&mut self.root, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

fn detach_children(node: &mut Node, stack: &mut Vec<Box<Node>>) {
    if let Node::Split { left, right, .. } = node {
        stack.push(std::mem::replace(left, Box::new(Node::Leaf { label: 0 })));
        stack.push(std::mem::replace(right, Box::new(Node::Leaf { label: 0 })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::constant_image;

    /// Tree used throughout:
    ///
    ///        [pixel 10]
    ///        /        \
    ///    Leaf(3)    [pixel 20]
    ///               /        \
    ///           Leaf(5)    Leaf(8)
    fn build_test_tree() -> DecisionTree {
        DecisionTree::new(Node::split(
            10,
            Node::leaf(3),
            Node::split(20, Node::leaf(5), Node::leaf(8)),
        ))
    }

    #[test]
    fn tree_stats() {
        let tree = build_test_tree();
        assert_eq!(tree.num_nodes(), 5);
        assert_eq!(tree.num_leaves(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn single_leaf_stats() {
        let tree = DecisionTree::new(Node::leaf(4));
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.num_leaves(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn classify_zero_goes_left() {
        let tree = build_test_tree();
        assert_eq!(tree.classify(&constant_image(0)), 3);
    }

    #[test]
    fn classify_bright_goes_right() {
        let tree = build_test_tree();
        assert_eq!(tree.classify(&constant_image(255)), 8);
    }

    #[test]
    fn classify_any_nonzero_goes_right() {
        // Intensity 1 is below the training split threshold but still
        // descends right at classification time.
        let tree = build_test_tree();
        assert_eq!(tree.classify(&constant_image(1)), 8);
    }

    #[test]
    fn classify_is_idempotent() {
        let tree = build_test_tree();
        let image = constant_image(255);
        assert_eq!(tree.classify(&image), tree.classify(&image));
    }

    #[test]
    fn drop_handles_deep_tree() {
        // Deep enough that a recursive drop would overflow the stack.
        let mut root = Node::leaf(0);
        for _ in 0..200_000 {
            root = Node::split(0, Node::leaf(1), root);
        }
        drop(DecisionTree::new(root));
    }
}
