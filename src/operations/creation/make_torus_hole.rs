use crate::csg::{CsgStore, NodeId};
use crate::error::{GeometryError, Result};
use crate::math::is_positive;
use crate::operations::boolean::Subtract;

use super::{MakeCylinder, MakeTorus};

/// Creates the cutter that bores a radiused wire channel through a plate.
///
/// The cutter is a centered cylinder of radius `major + minor` with a
/// [`MakeTorus`] of the same radii removed from it. Subtracting the cutter
/// from a plate of thickness `2 * minor` leaves a channel of radius `major`
/// at the mid-plane whose edges are rounded by the torus tube.
///
/// The cylinder extends `pad` beyond the torus on both faces so the
/// channel opens cleanly through the surrounding plate.
pub struct MakeTorusHole {
    major_radius: f64,
    minor_radius: f64,
    pad: f64,
}

impl MakeTorusHole {
    /// Creates a new `MakeTorusHole` operation.
    #[must_use]
    pub fn new(major_radius: f64, minor_radius: f64, pad: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
            pad,
        }
    }

    /// Cylinder height: the torus thickness plus `pad` on each side.
    #[must_use]
    pub fn height(&self) -> f64 {
        2.0 * (self.minor_radius + self.pad)
    }

    /// Executes the operation, adding the cutter to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the torus radii are degenerate or `pad` is not
    /// strictly positive.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if !is_positive(self.pad) {
            return Err(GeometryError::Degenerate(format!(
                "torus hole pad must be positive, got {}",
                self.pad
            ))
            .into());
        }
        let torus = MakeTorus::new(self.major_radius, self.minor_radius).execute(store)?;
        let cylinder = MakeCylinder::new(self.major_radius + self.minor_radius, self.height())
            .centered()
            .execute(store)?;
        Subtract::new(cylinder, torus).execute(store)
    }
}
