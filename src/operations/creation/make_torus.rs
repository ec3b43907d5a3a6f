use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::error::{GeometryError, Result};
use crate::math::is_positive;

/// Creates a torus around the Z axis.
///
/// A circle of radius `minor_radius`, centred `major_radius + minor_radius`
/// from the axis, is revolved a full turn. The result is a ring whose bore
/// has radius `major_radius` and whose tube spans `[-minor, minor]` in Z.
pub struct MakeTorus {
    major_radius: f64,
    minor_radius: f64,
}

impl MakeTorus {
    /// Creates a new `MakeTorus` operation.
    #[must_use]
    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
        }
    }

    /// Executes the operation, adding the torus to the store.
    ///
    /// A zero major radius is allowed and closes the bore to a point.
    ///
    /// # Errors
    ///
    /// Returns an error if the minor radius is not strictly positive or the
    /// major radius is negative or not finite.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if !is_positive(self.minor_radius) {
            return Err(GeometryError::Degenerate(format!(
                "torus minor radius must be positive, got {}",
                self.minor_radius
            ))
            .into());
        }
        if !(self.major_radius.is_finite() && self.major_radius >= 0.0) {
            return Err(GeometryError::Degenerate(format!(
                "torus major radius must not be negative, got {}",
                self.major_radius
            ))
            .into());
        }
        Ok(store.add_node(CsgNode::Primitive(Primitive::Torus {
            major_radius: self.major_radius,
            minor_radius: self.minor_radius,
        })))
    }
}
