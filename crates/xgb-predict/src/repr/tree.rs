//! Canonical tree representation and structural validation.
//!
//! A [`Tree`] is an arena of [`Node`]s addressed by index, with the root at
//! index 0. Trees can only be constructed through [`Tree::try_new`], which
//! runs [`Tree::validate`]; every `Tree` value is therefore non-empty, has
//! in-range child indices and is acyclic, which is what lets [`Tree::eval`]
//! descend without an iteration bound.

use crate::data::SampleAccessor;

use super::node::Node;
use super::NodeId;

// ============================================================================
// TreeValidationError
// ============================================================================

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeValidationError {
    /// Tree has no nodes.
    #[error("empty tree")]
    EmptyTree,

    /// A child pointer references an out-of-bounds node.
    #[error("node {node} {side} child {child} is out of range for a tree of {n_nodes} nodes")]
    ChildOutOfBounds {
        node: NodeId,
        side: &'static str,
        child: NodeId,
        n_nodes: usize,
    },

    /// A decision node was reached twice, through a cycle or a shared subtree.
    #[error("cycle in tree at node {node}")]
    CycleDetected { node: NodeId },
}

/// Immutable, validated decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Box<[Node]>,
}

impl Tree {
    /// Build a tree from its nodes, root first, and validate it.
    pub fn try_new(nodes: Vec<Node>) -> Result<Self, TreeValidationError> {
        let tree = Self {
            nodes: nodes.into_boxed_slice(),
        };
        tree.validate()?;
        Ok(tree)
    }

    /// A tree made of a single leaf.
    pub fn constant(value: f32) -> Self {
        Self {
            nodes: Box::new([Node::leaf(value)]),
        }
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Number of leaf nodes.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate the structural invariants of this tree.
    ///
    /// Checks, in order: the tree is non-empty; every decision node (reachable
    /// or not) has `yes`, `no` and `missing` indices below the node count; and
    /// a depth-first walk from the root, which marks each decision node on
    /// arrival and follows each distinct child once, never arrives at a marked
    /// node. The last rule rejects true cycles as well as two parents sharing
    /// one subtree.
    pub fn validate(&self) -> Result<(), TreeValidationError> {
        let n_nodes = self.nodes.len();
        if n_nodes == 0 {
            return Err(TreeValidationError::EmptyTree);
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if node.is_leaf() {
                continue;
            }
            for (side, child) in [("yes", node.yes), ("no", node.no), ("missing", node.missing)] {
                if child as usize >= n_nodes {
                    return Err(TreeValidationError::ChildOutOfBounds {
                        node: idx as NodeId,
                        side,
                        child,
                        n_nodes,
                    });
                }
            }
        }

        let mut visited = vec![false; n_nodes];
        let mut stack: Vec<NodeId> = vec![0];
        let mut children: Vec<NodeId> = Vec::with_capacity(3);

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            if node.is_leaf() {
                continue;
            }
            if visited[id as usize] {
                return Err(TreeValidationError::CycleDetected { node: id });
            }
            visited[id as usize] = true;

            // Reversed so `yes` is explored first.
            children.clear();
            children.extend(node.distinct_children());
            stack.extend(children.iter().rev());
        }

        Ok(())
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Evaluate the tree for one sample and return the reached leaf's score.
    ///
    /// At a decision node a present feature goes to `yes` when it is strictly
    /// below the threshold and to `no` otherwise; a missing or out-of-range
    /// feature goes to `missing`.
    #[inline]
    pub fn eval<S: SampleAccessor + ?Sized>(&self, sample: &S) -> f32 {
        let mut node = &self.nodes[0];

        while let Some(feature) = node.split_index() {
            let next = match sample.feature(feature) {
                Some(value) if value < node.value => node.yes,
                Some(_) => node.no,
                None => node.missing,
            };
            node = &self.nodes[next as usize];
        }

        node.value
    }
}
