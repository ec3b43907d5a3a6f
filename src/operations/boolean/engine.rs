use crate::csg::{CsgNode, CsgStore, NodeId};
use crate::error::{CsgError, Result};

use super::select::BooleanOp;

/// Checks that every operand exists, then inserts the boolean node.
///
/// For [`BooleanOp::Subtract`] the first operand is the base and the rest
/// are cutters.
pub(super) fn boolean_execute(
    store: &mut CsgStore,
    op: BooleanOp,
    operands: &[NodeId],
) -> Result<NodeId> {
    let Some((&first, rest)) = operands.split_first() else {
        return Err(CsgError::MissingOperand(op.name()).into());
    };
    for &id in operands {
        store.node(id)?;
    }

    let node = match op {
        BooleanOp::Union => CsgNode::Union(operands.to_vec()),
        BooleanOp::Intersect => CsgNode::Intersection(operands.to_vec()),
        BooleanOp::Subtract => {
            if rest.is_empty() {
                return Err(CsgError::MissingOperand(op.name()).into());
            }
            CsgNode::Difference {
                base: first,
                cutters: rest.to_vec(),
            }
        }
    };
    Ok(store.add_node(node))
}
