use tracing::debug;

use crate::csg::{CsgStore, NodeId};
use crate::error::{GeometryError, Result};
use crate::math::{is_positive, Vector3};
use crate::operations::boolean::Union;
use crate::operations::creation::MakeTorusHole;
use crate::operations::transform::Translate;

/// Places a rectangular grid of torus-hole cutters.
///
/// The first cutter is centred on the origin; the others follow at `pitch`
/// along +X and +Y. Every instance refers to the same cutter node.
pub struct TorusHoleArray {
    major_radius: f64,
    minor_radius: f64,
    pitch: f64,
    count_x: u32,
    count_y: u32,
    pad: f64,
}

impl TorusHoleArray {
    /// Creates a new `TorusHoleArray` operation.
    #[must_use]
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        pitch: f64,
        count_x: u32,
        count_y: u32,
        pad: f64,
    ) -> Self {
        Self {
            major_radius,
            minor_radius,
            pitch,
            count_x,
            count_y,
            pad,
        }
    }

    /// Executes the operation, returning the union of all instances.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero, the instance count does not
    /// fit in a `u32`, the pitch is not positive, or the cutter itself is
    /// degenerate.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if self.count_x == 0 || self.count_y == 0 {
            return Err(GeometryError::EmptyPattern.into());
        }
        if !is_positive(self.pitch) {
            return Err(GeometryError::Degenerate(format!(
                "pattern pitch must be positive, got {}",
                self.pitch
            ))
            .into());
        }

        let total = self.count_x.checked_mul(self.count_y).ok_or_else(|| {
            GeometryError::Degenerate(format!(
                "pattern of {} x {} instances is too large",
                self.count_x, self.count_y
            ))
        })?;

        let cutter =
            MakeTorusHole::new(self.major_radius, self.minor_radius, self.pad).execute(store)?;

        let mut instances = Vec::with_capacity(total as usize);
        for i in 0..self.count_x {
            for j in 0..self.count_y {
                let offset = Vector3::new(
                    f64::from(i) * self.pitch,
                    f64::from(j) * self.pitch,
                    0.0,
                );
                instances.push(Translate::new(cutter, offset).execute(store)?);
            }
        }
        debug!(
            count_x = self.count_x,
            count_y = self.count_y,
            pitch = self.pitch,
            "placed torus hole array"
        );
        Union::of(instances).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::csg::NodeRecord;
    use crate::error::WireCombError;
    use crate::math::Point3;
    use crate::operations::query::{classify_point, BoundingBox, PointClassification};
    use approx::assert_relative_eq;

    #[test]
    fn grid_shares_a_single_cutter() {
        let mut store = CsgStore::new();
        let array = TorusHoleArray::new(2.5, 2.6, 10.2, 2, 3, 0.01)
            .execute(&mut store)
            .unwrap();

        let doc = store.export(array).unwrap();
        let cutter = doc
            .nodes
            .iter()
            .position(|record| matches!(record, NodeRecord::Difference { .. }))
            .unwrap();
        assert_eq!(doc.reference_count(cutter), 6);
        let NodeRecord::Union { children } = &doc.nodes[doc.root] else {
            panic!("array root must be a union");
        };
        assert_eq!(children.len(), 6);
    }

    #[test]
    fn grid_extends_along_positive_axes() {
        let mut store = CsgStore::new();
        let array = TorusHoleArray::new(2.5, 2.6, 10.2, 2, 3, 0.01)
            .execute(&mut store)
            .unwrap();

        let aabb = BoundingBox::new(array).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.x, -5.1, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.x, 10.2 + 5.1, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 2.0 * 10.2 + 5.1, epsilon = 1e-12);
    }

    #[test]
    fn every_grid_position_has_a_bore() {
        let mut store = CsgStore::new();
        let array = TorusHoleArray::new(1.0, 0.5, 4.0, 3, 2, 0.01)
            .execute(&mut store)
            .unwrap();

        for i in 0..3 {
            for j in 0..2 {
                let center = Point3::new(f64::from(i) * 4.0, f64::from(j) * 4.0, 0.0);
                assert_eq!(
                    classify_point(&center, array, &store).unwrap(),
                    PointClassification::Inside
                );
            }
        }
        let between = Point3::new(2.0, 2.0, 0.0);
        assert_eq!(
            classify_point(&between, array, &store).unwrap(),
            PointClassification::Outside
        );
    }

    #[test]
    fn oversized_grid_fails_before_building() {
        let mut store = CsgStore::new();
        let result = TorusHoleArray::new(2.5, 2.6, 10.2, 2, 1 << 31, 0.01).execute(&mut store);
        assert!(matches!(
            result,
            Err(WireCombError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_grid_fails() {
        let mut store = CsgStore::new();
        let result = TorusHoleArray::new(2.5, 2.6, 10.2, 2, 0, 0.01).execute(&mut store);
        assert!(result.is_err());
    }
}
