use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::error::{GeometryError, Result};
use crate::math::{is_positive, Vector3};

/// Creates an axis-aligned box primitive.
pub struct MakeCube {
    size: Vector3,
    centered: bool,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation with its minimum corner at the origin.
    #[must_use]
    pub fn new(size: Vector3) -> Self {
        Self {
            size,
            centered: false,
        }
    }

    /// Centers the box on the origin instead.
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Executes the operation, adding the box to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge length is not strictly positive.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if !self.size.iter().all(|&len| is_positive(len)) {
            return Err(GeometryError::Degenerate(format!(
                "cube size must be positive, got [{}, {}, {}]",
                self.size.x, self.size.y, self.size.z
            ))
            .into());
        }
        Ok(store.add_node(CsgNode::Primitive(Primitive::Cube {
            size: self.size,
            centered: self.centered,
        })))
    }
}
