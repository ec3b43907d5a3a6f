use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::error::{GeometryError, Result};
use crate::math::is_positive;

/// Creates a cylinder primitive along +Z.
///
/// The base sits on the XY plane unless the cylinder is centered, in which
/// case it spans `[-height / 2, height / 2]`.
pub struct MakeCylinder {
    radius: f64,
    height: f64,
    centered: bool,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius,
            height,
            centered: false,
        }
    }

    #[must_use]
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Executes the operation, adding the cylinder to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not strictly positive.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if !is_positive(self.radius) {
            return Err(GeometryError::Degenerate(format!(
                "cylinder radius must be positive, got {}",
                self.radius
            ))
            .into());
        }
        if !is_positive(self.height) {
            return Err(GeometryError::Degenerate(format!(
                "cylinder height must be positive, got {}",
                self.height
            ))
            .into());
        }
        Ok(store.add_node(CsgNode::Primitive(Primitive::Cylinder {
            radius: self.radius,
            height: self.height,
            centered: self.centered,
        })))
    }
}
