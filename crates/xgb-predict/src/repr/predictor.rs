//! Output-group predictor: the trees contributing to one model output.

use crate::data::SampleAccessor;

use super::Tree;

/// Ordered collection of trees belonging to one output group.
///
/// A group is one class of a multi-class model, or the single output of a
/// regression or binary model. Its raw score is the sum of its trees' leaf
/// outputs, accumulated in tree order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictor {
    trees: Vec<Tree>,
}

impl Predictor {
    pub fn new(trees: Vec<Tree>) -> Self {
        Self { trees }
    }

    pub fn push(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    #[inline]
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Sum of the leaf outputs of every tree for one sample.
    ///
    /// An empty group sums to `0.0`.
    #[inline]
    pub fn sum<S: SampleAccessor + ?Sized>(&self, sample: &S) -> f32 {
        self.trees
            .iter()
            .fold(0.0f32, |acc, tree| acc + tree.eval(sample))
    }
}

impl FromIterator<Tree> for Predictor {
    fn from_iter<I: IntoIterator<Item = Tree>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
