use crate::csg::{CsgStore, NodeId};
use crate::error::Result;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean union of solids.
pub struct Union {
    solids: Vec<NodeId>,
}

impl Union {
    /// Creates a new `Union` operation of two solids.
    #[must_use]
    pub fn new(solid_a: NodeId, solid_b: NodeId) -> Self {
        Self {
            solids: vec![solid_a, solid_b],
        }
    }

    /// Creates a union of any number of solids.
    #[must_use]
    pub fn of(solids: Vec<NodeId>) -> Self {
        Self { solids }
    }

    /// Executes the union, adding the result node to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no operands or an operand is not in the store.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        boolean_execute(store, BooleanOp::Union, &self.solids)
    }
}
