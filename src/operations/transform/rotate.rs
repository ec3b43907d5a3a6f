use nalgebra::{Translation3, Unit, UnitQuaternion};

use crate::csg::{CsgNode, CsgStore, NodeId};
use crate::error::{GeometryError, Result};
use crate::math::{Isometry3, Vector3, TOLERANCE};

/// Rotates a solid around an axis through the origin.
pub struct Rotate {
    solid: NodeId,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise looking down the axis.
    #[must_use]
    pub fn new(solid: NodeId, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            solid,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, adding a transform node that refers to the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length or the solid is
    /// not in the store.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if self.axis_direction.norm() < TOLERANCE {
            return Err(GeometryError::Degenerate("rotation axis must be non-zero".into()).into());
        }
        store.node(self.solid)?;

        let axis = Unit::new_normalize(self.axis_direction);
        let rotation = UnitQuaternion::from_axis_angle(&axis, self.angle);
        Ok(store.add_node(CsgNode::Transform {
            child: self.solid,
            isometry: Isometry3::from_parts(Translation3::identity(), rotation),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCylinder;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_about_y_lays_cylinder_along_x() {
        let mut store = CsgStore::new();
        let cylinder = MakeCylinder::new(1.0, 4.0).execute(&mut store).unwrap();
        let flat = Rotate::new(cylinder, Vector3::y(), FRAC_PI_2)
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(flat).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.min.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_fails() {
        let mut store = CsgStore::new();
        let cylinder = MakeCylinder::new(1.0, 4.0).execute(&mut store).unwrap();
        assert!(Rotate::new(cylinder, Vector3::zeros(), 1.0)
            .execute(&mut store)
            .is_err());
    }
}
