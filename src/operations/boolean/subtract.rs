use crate::csg::{CsgStore, NodeId};
use crate::error::Result;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean subtraction of solids from a base solid.
pub struct Subtract {
    operands: Vec<NodeId>,
}

impl Subtract {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(solid_a: NodeId, solid_b: NodeId) -> Self {
        Self {
            operands: vec![solid_a, solid_b],
        }
    }

    /// Creates a subtraction of every cutter from `base`.
    #[must_use]
    pub fn many(base: NodeId, cutters: &[NodeId]) -> Self {
        let mut operands = Vec::with_capacity(cutters.len() + 1);
        operands.push(base);
        operands.extend_from_slice(cutters);
        Self { operands }
    }

    /// Executes the subtraction, adding the result node to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if no cutter is given or an operand is not in the store.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        boolean_execute(store, BooleanOp::Subtract, &self.operands)
    }
}
