use crate::csg::{CsgStore, NodeId};
use crate::error::Result;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean intersection of two solids.
pub struct Intersect {
    solid_a: NodeId,
    solid_b: NodeId,
}

impl Intersect {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(solid_a: NodeId, solid_b: NodeId) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the intersection, adding the result node to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if an operand is not in the store.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        boolean_execute(store, BooleanOp::Intersect, &[self.solid_a, self.solid_b])
    }
}
