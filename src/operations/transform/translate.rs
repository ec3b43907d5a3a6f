use crate::csg::{CsgNode, CsgStore, NodeId};
use crate::error::{GeometryError, Result};
use crate::math::{Isometry3, Vector3};

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: NodeId,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: NodeId, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, adding a transform node that refers to the
    /// solid. The solid itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the displacement is not finite or the solid is
    /// not in the store.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if !self.displacement.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::Degenerate("translation must be finite".into()).into());
        }
        store.node(self.solid)?;

        Ok(store.add_node(CsgNode::Transform {
            child: self.solid,
            isometry: Isometry3::translation(
                self.displacement.x,
                self.displacement.y,
                self.displacement.z,
            ),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;

    #[test]
    fn translated_cube_moves_bounding_box() {
        let mut store = CsgStore::new();
        let cube = MakeCube::new(Vector3::new(1.0, 2.0, 3.0))
            .execute(&mut store)
            .unwrap();
        let moved = Translate::new(cube, Vector3::new(10.0, -5.0, 0.5))
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(moved).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.x, 10.0);
        assert_relative_eq!(aabb.max.y, -3.0);
        assert_relative_eq!(aabb.max.z, 3.5);

        let original = BoundingBox::new(cube).execute(&store).unwrap();
        assert_relative_eq!(original.min.x, 0.0);
    }

    #[test]
    fn non_finite_displacement_fails() {
        let mut store = CsgStore::new();
        let cube = MakeCube::new(Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        assert!(Translate::new(cube, Vector3::new(f64::NAN, 0.0, 0.0))
            .execute(&mut store)
            .is_err());
    }
}
