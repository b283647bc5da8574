//! Conversion from XGBoost JSON types to the native model.

use tracing::{debug, warn};

use crate::model::{Model, Objective};
use crate::repr::{Node, NodeId, Predictor, Tree};

use super::json::{XgbModel, XgbTree};
use super::{GroupError, LoadError};

/// Negative child indices map to an index no tree can hold.
#[inline]
fn child_index(raw: i32) -> NodeId {
    NodeId::try_from(raw).unwrap_or(NodeId::MAX)
}

impl XgbTree {
    /// Build the node arena, one node per array position.
    ///
    /// A node is a decision node when its left child is non-negative; the
    /// `missing` branch is the left child when `default_left` is set and the
    /// right child otherwise.
    pub fn to_nodes(&self) -> Vec<Node> {
        (0..self.n_nodes())
            .map(|i| {
                let left = self.left_children[i];
                let right = self.right_children[i];
                let value = self.split_conditions[i];
                if left < 0 {
                    return Node::leaf(value);
                }

                let (yes, no) = (child_index(left), child_index(right));
                Node {
                    value,
                    feature: self.split_indices[i],
                    yes,
                    no,
                    missing: if self.default_left[i] { yes } else { no },
                }
            })
            .collect()
    }
}

impl XgbModel {
    /// Validate every tree, group them by output, remap the base score and
    /// assemble the immutable [`Model`].
    pub fn into_model(self) -> Result<Model, LoadError> {
        let trees = self
            .trees
            .iter()
            .enumerate()
            .map(|(tree, xgb)| {
                Tree::try_new(xgb.to_nodes()).map_err(|source| LoadError::InvalidTree { tree, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let n_trees = trees.len();

        let predictors = group_trees(trees, &self.tree_info)?;
        for (group, predictor) in predictors.iter().enumerate() {
            if predictor.is_empty() {
                warn!(group, "output group has no trees; it predicts the base score only");
            }
        }

        let objective = Objective::from(self.objective.as_str());
        let base_score = objective
            .base_score_to_margin(self.base_score)
            .ok_or_else(|| LoadError::InvalidBaseScore {
                objective: self.objective.clone(),
                base_score: self.base_score,
            })?;

        debug!(
            n_trees,
            n_groups = predictors.len(),
            objective = %objective,
            base_score,
            transformation = %objective.transformation(),
            "loaded XGBoost model"
        );

        Ok(Model::from_parts(predictors, base_score, objective))
    }
}

/// Assign trees to output groups in file order.
///
/// The group list grows to `max(group) + 1`; ids that never occur leave an
/// empty group behind.
fn group_trees(trees: Vec<Tree>, tree_info: &[i32]) -> Result<Vec<Predictor>, GroupError> {
    if tree_info.len() != trees.len() {
        return Err(GroupError::LengthMismatch {
            n_trees: trees.len(),
            len: tree_info.len(),
        });
    }

    let mut groups: Vec<Predictor> = Vec::new();
    for (tree_idx, (tree, &group)) in trees.into_iter().zip(tree_info).enumerate() {
        let group = usize::try_from(group).map_err(|_| GroupError::NegativeGroup {
            tree: tree_idx,
            group,
        })?;
        if group >= groups.len() {
            groups.resize_with(group + 1, Predictor::default);
        }
        groups[group].push(tree);
    }
    Ok(groups)
}
