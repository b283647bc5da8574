//! Tree node type.

use super::NodeId;

/// Feature index marking a leaf node.
pub const LEAF_FEATURE: i32 = -1;

/// One decision or leaf unit of a tree.
///
/// For a decision node, `value` is the split threshold and `feature` the
/// feature index tested. For a leaf, `value` is the leaf score and `feature`
/// is negative ([`LEAF_FEATURE`]); the child indices are then unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Split threshold (decision) or leaf score (leaf).
    pub value: f32,
    /// Feature index to test, negative for leaves.
    pub feature: i32,
    /// Next node when `feature < value`.
    pub yes: NodeId,
    /// Next node when `feature >= value`.
    pub no: NodeId,
    /// Next node when the feature is missing or out of range.
    pub missing: NodeId,
}

impl Node {
    /// Create a leaf with the given score.
    pub fn leaf(value: f32) -> Self {
        Self {
            value,
            feature: LEAF_FEATURE,
            yes: 0,
            no: 0,
            missing: 0,
        }
    }

    /// Create a numeric decision node.
    pub fn split(feature: u32, threshold: f32, yes: NodeId, no: NodeId, missing: NodeId) -> Self {
        Self {
            value: threshold,
            feature: i32::try_from(feature).unwrap_or(i32::MAX),
            yes,
            no,
            missing,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.feature < 0
    }

    /// Feature index for a decision node, `None` for leaves.
    #[inline]
    pub fn split_index(&self) -> Option<usize> {
        usize::try_from(self.feature).ok()
    }

    /// The distinct children of a decision node, in `yes`, `no`, `missing` order.
    pub(crate) fn distinct_children(&self) -> impl Iterator<Item = NodeId> {
        let (yes, no, missing) = (self.yes, self.no, self.missing);
        let no = (no != yes).then_some(no);
        let missing = (missing != yes && missing != self.no).then_some(missing);
        std::iter::once(yes).chain(no).chain(missing)
    }
}
