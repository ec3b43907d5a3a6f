use tracing::warn;

use crate::error::ConfigurationError;
use crate::math::{Point3, Vector3};

use super::CombParams;

/// Geometric constants derived from validated [`CombParams`].
///
/// Every builder receives these explicitly; nothing reads global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub hole_count: u32,
    pub hole_diameter: f64,
    pub hole_radius: f64,
    pub thickness: f64,
    /// Diameter of the torus tube rounding each channel edge. Equal to the
    /// plate thickness, so the tube always fits inside the plate.
    pub torus_body_diameter: f64,
    pub torus_body_radius: f64,
    /// Centre-to-centre spacing of wire channels, pegs and peg holes.
    pub pitch: f64,
    /// Extent of the comb along the row (Y) axis.
    pub depth: f64,
    pub peg_clearance: f64,
    pub peg_end_clearance: f64,
    pub pad: f64,
}

impl Dimensions {
    /// Validates `params` and computes the derived constants.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the hole count is zero, a length
    /// is not strictly positive, a clearance is negative, or any value is
    /// not finite.
    pub fn new(params: &CombParams) -> Result<Self, ConfigurationError> {
        if params.hole_count < 1 {
            return Err(ConfigurationError::InvalidHoleCount(params.hole_count));
        }
        positive("hole-diameter", params.hole_diameter)?;
        positive("thickness", params.thickness)?;
        non_negative("peg-clearance", params.peg_clearance)?;
        non_negative("peg-end-clearance", params.peg_end_clearance)?;
        positive("pad", params.pad)?;
        positive("arc-resolution", params.arc_resolution)?;

        if params.pad * 10.0 > params.thickness.min(params.hole_diameter) {
            warn!(
                pad = params.pad,
                thickness = params.thickness,
                hole_diameter = params.hole_diameter,
                "pad is not small relative to the comb features"
            );
        }

        let hole_radius = params.hole_diameter / 2.0;
        let torus_body_diameter = params.thickness;
        let torus_body_radius = torus_body_diameter / 2.0;
        let pitch = params.hole_diameter + torus_body_diameter;
        let depth = f64::from(params.hole_count) * pitch + torus_body_diameter;

        Ok(Self {
            hole_count: params.hole_count,
            hole_diameter: params.hole_diameter,
            hole_radius,
            thickness: params.thickness,
            torus_body_diameter,
            torus_body_radius,
            pitch,
            depth,
            peg_clearance: params.peg_clearance,
            peg_end_clearance: params.peg_end_clearance,
            pad: params.pad,
        })
    }

    /// Size of the unperforated two-column block.
    #[must_use]
    pub fn block_size(&self) -> Vector3 {
        Vector3::new(
            2.0 * self.pitch + self.torus_body_diameter,
            self.depth,
            self.thickness,
        )
    }

    /// Centre of the first wire channel, on the plate mid-plane.
    #[must_use]
    pub fn first_channel_center(&self) -> Point3 {
        let inset = self.torus_body_diameter + self.hole_radius;
        Point3::new(inset, inset, self.torus_body_radius)
    }

    /// Peg diameter.
    #[must_use]
    pub fn peg_diameter(&self) -> f64 {
        self.torus_body_radius
    }

    /// Length a peg protrudes beyond its piece face.
    #[must_use]
    pub fn peg_length(&self) -> f64 {
        self.torus_body_radius
    }

    #[must_use]
    pub fn peg_hole_diameter(&self) -> f64 {
        self.torus_body_radius + self.peg_clearance
    }

    #[must_use]
    pub fn peg_hole_depth(&self) -> f64 {
        self.torus_body_radius + self.peg_end_clearance
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidParameter {
            parameter,
            value,
            constraint: "finite and greater than zero",
        })
    }
}

fn non_negative(parameter: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidParameter {
            parameter,
            value,
            constraint: "finite and not negative",
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn params(hole_count: u32, hole_diameter: f64, thickness: f64) -> CombParams {
        CombParams {
            hole_count,
            hole_diameter,
            thickness,
            ..CombParams::default()
        }
    }

    #[test]
    fn reference_comb_constants() {
        let dims = Dimensions::new(&params(8, 5.0, 5.2)).unwrap();
        assert_relative_eq!(dims.hole_radius, 2.5);
        assert_relative_eq!(dims.torus_body_radius, 2.6);
        assert_relative_eq!(dims.pitch, 10.2, epsilon = 1e-12);
        assert_relative_eq!(dims.depth, 86.8, epsilon = 1e-9);

        let size = dims.block_size();
        assert_relative_eq!(size.x, 25.6, epsilon = 1e-9);
        assert_relative_eq!(size.y, 86.8, epsilon = 1e-9);
        assert_relative_eq!(size.z, 5.2);
    }

    #[test]
    fn peg_hole_is_wider_than_peg() {
        let params = CombParams {
            peg_clearance: 0.3,
            thickness: 5.2,
            ..CombParams::default()
        };
        let dims = Dimensions::new(&params).unwrap();
        assert_relative_eq!(dims.peg_diameter(), 2.6);
        assert_relative_eq!(dims.peg_hole_diameter(), 2.9, epsilon = 1e-12);
        assert!(dims.peg_diameter() < dims.peg_hole_diameter());
    }

    #[test]
    fn zero_clearance_is_an_exact_fit() {
        let params = CombParams {
            peg_clearance: 0.0,
            peg_end_clearance: 0.0,
            ..CombParams::default()
        };
        let dims = Dimensions::new(&params).unwrap();
        assert_relative_eq!(dims.peg_diameter(), dims.peg_hole_diameter());
        assert_relative_eq!(dims.peg_length(), dims.peg_hole_depth());
    }

    #[test]
    fn zero_hole_count_fails() {
        let err = Dimensions::new(&params(0, 5.0, 5.2)).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidHoleCount(0)));
    }

    #[test]
    fn non_positive_lengths_fail() {
        assert!(Dimensions::new(&params(8, 0.0, 5.2)).is_err());
        assert!(Dimensions::new(&params(8, 5.0, -5.2)).is_err());
        assert!(Dimensions::new(&params(8, f64::NAN, 5.2)).is_err());
        assert!(Dimensions::new(&params(8, 5.0, f64::INFINITY)).is_err());

        let no_pad = CombParams {
            pad: 0.0,
            ..CombParams::default()
        };
        assert!(matches!(
            Dimensions::new(&no_pad).unwrap_err(),
            ConfigurationError::InvalidParameter { parameter: "pad", .. }
        ));

        let no_resolution = CombParams {
            arc_resolution: 0.0,
            ..CombParams::default()
        };
        assert!(Dimensions::new(&no_resolution).is_err());
    }

    #[test]
    fn negative_clearances_fail() {
        let loose = CombParams {
            peg_clearance: -0.1,
            ..CombParams::default()
        };
        assert!(matches!(
            Dimensions::new(&loose).unwrap_err(),
            ConfigurationError::InvalidParameter {
                parameter: "peg-clearance",
                ..
            }
        ));

        let shallow = CombParams {
            peg_end_clearance: -0.1,
            ..CombParams::default()
        };
        assert!(Dimensions::new(&shallow).is_err());
    }

    proptest! {
        #[test]
        fn derived_constants_follow_primary_parameters(
            hole_count in 1u32..64,
            hole_diameter in 0.5f64..20.0,
            thickness in 0.5f64..20.0,
        ) {
            let dims = Dimensions::new(&params(hole_count, hole_diameter, thickness)).unwrap();
            prop_assert!((dims.pitch - (hole_diameter + thickness)).abs() < 1e-9);
            let depth = f64::from(hole_count) * (hole_diameter + thickness) + thickness;
            prop_assert!((dims.depth - depth).abs() < 1e-9);
            prop_assert!(dims.torus_body_radius <= thickness / 2.0);
            let size = dims.block_size();
            prop_assert!((size.x - (2.0 * (hole_diameter + thickness) + thickness)).abs() < 1e-9);
        }

        #[test]
        fn pegs_always_fit_their_holes(
            peg_clearance in 0.0f64..2.0,
            peg_end_clearance in 0.0f64..2.0,
            thickness in 0.5f64..20.0,
        ) {
            let params = CombParams {
                peg_clearance,
                peg_end_clearance,
                thickness,
                ..CombParams::default()
            };
            let dims = Dimensions::new(&params).unwrap();
            prop_assert!(dims.peg_hole_depth() >= dims.peg_length());
            if peg_clearance > 0.0 {
                prop_assert!(dims.peg_diameter() < dims.peg_hole_diameter());
            }
        }
    }
}
