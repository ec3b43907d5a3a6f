use crate::csg::{CsgStore, NodeId};
use crate::error::Result;
use crate::math::Point3;

use super::{classify_point, BoundingBox, PointClassification};

/// Estimates the volume of a CSG tree by sampling.
///
/// The bounding box is divided into `samples³` cells and the centre of each
/// cell is classified. Inside cells count fully, boundary cells count half.
/// The estimate converges as `samples` grows and is deterministic for a
/// given tree and sample count.
pub struct Volume {
    solid: NodeId,
    samples: u32,
}

impl Volume {
    /// Creates a new `Volume` query with the default sampling density.
    #[must_use]
    pub fn new(solid: NodeId) -> Self {
        Self { solid, samples: 48 }
    }

    /// Sets the number of cells along each axis.
    #[must_use]
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Executes the query, returning the estimated volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree refers to a node outside the store.
    pub fn execute(&self, store: &CsgStore) -> Result<f64> {
        let aabb = BoundingBox::new(self.solid).execute(store)?;
        if aabb.is_empty() {
            return Ok(0.0);
        }

        let n = f64::from(self.samples);
        let cell = aabb.size() / n;
        let cell_volume = cell.x * cell.y * cell.z;

        let mut weight = 0.0;
        for i in 0..self.samples {
            for j in 0..self.samples {
                for k in 0..self.samples {
                    let center = Point3::new(
                        aabb.min.x + (f64::from(i) + 0.5) * cell.x,
                        aabb.min.y + (f64::from(j) + 0.5) * cell.y,
                        aabb.min.z + (f64::from(k) + 0.5) * cell.z,
                    );
                    weight += match classify_point(&center, self.solid, store)? {
                        PointClassification::Inside => 1.0,
                        PointClassification::OnBoundary => 0.5,
                        PointClassification::Outside => 0.0,
                    };
                }
            }
        }
        Ok(weight * cell_volume)
    }
}
