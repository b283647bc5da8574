//! In-memory tree ensemble representation.
//!
//! - [`Node`]: one decision or leaf unit.
//! - [`Tree`]: validated arena of nodes, root at index 0.
//! - [`Predictor`]: the trees of one output group.

/// Node index within its owning tree.
pub type NodeId = u32;

mod node;
mod predictor;
mod tree;

pub use node::{Node, LEAF_FEATURE};
pub use predictor::Predictor;
pub use tree::{Tree, TreeValidationError};
