use std::f64::consts::FRAC_PI_2;

use crate::csg::{CsgStore, NodeId};
use crate::error::{GeometryError, Result};
use crate::math::{is_positive, Vector3};
use crate::operations::boolean::Union;
use crate::operations::creation::MakeCylinder;
use crate::operations::transform::{Rotate, Translate};

/// Places a row of cylinders lying flat along +X.
///
/// Each cylinder starts on the YZ plane and extends `height` along +X. The
/// row runs along +Y, with the first cylinder's axis on the X axis and the
/// rest spaced at `pitch`.
pub struct RowOfCylinders {
    height: f64,
    diameter: f64,
    pitch: f64,
    count: u32,
}

impl RowOfCylinders {
    /// Creates a new `RowOfCylinders` operation.
    #[must_use]
    pub fn new(height: f64, diameter: f64, pitch: f64, count: u32) -> Self {
        Self {
            height,
            diameter,
            pitch,
            count,
        }
    }

    /// Executes the operation, returning the union of all cylinders.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, the pitch is not positive, or
    /// the cylinder is degenerate.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        if self.count == 0 {
            return Err(GeometryError::EmptyPattern.into());
        }
        if !is_positive(self.pitch) {
            return Err(GeometryError::Degenerate(format!(
                "pattern pitch must be positive, got {}",
                self.pitch
            ))
            .into());
        }

        let upright = MakeCylinder::new(self.diameter / 2.0, self.height).execute(store)?;
        let flat = Rotate::new(upright, Vector3::y(), FRAC_PI_2).execute(store)?;

        let instances = (0..self.count)
            .map(|i| {
                let offset = Vector3::new(0.0, f64::from(i) * self.pitch, 0.0);
                Translate::new(flat, offset).execute(store)
            })
            .collect::<Result<Vec<_>>>()?;
        Union::of(instances).execute(store)
    }
}
