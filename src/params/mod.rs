mod dimensions;
mod piece;

pub use dimensions::Dimensions;
pub use piece::Piece;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Primary parameters for one construction pass.
///
/// All lengths are in millimetres. Missing fields take the values of
/// [`CombParams::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CombParams {
    /// Which of the four pieces to build.
    pub piece: Piece,
    /// Wire channels per column.
    pub hole_count: u32,
    /// Wire channel diameter.
    pub hole_diameter: f64,
    /// Plate thickness, which is also the diameter of the torus body that
    /// rounds each channel edge.
    pub thickness: f64,
    /// How much wider a peg hole is than its peg.
    pub peg_clearance: f64,
    /// How much deeper a peg hole is than its peg is long.
    pub peg_end_clearance: f64,
    /// Overlap used to keep boolean operands from sharing faces.
    pub pad: f64,
    /// Minimum fragment length on curved surfaces, handed to the kernel.
    pub arc_resolution: f64,
}

impl Default for CombParams {
    fn default() -> Self {
        Self {
            piece: Piece::default(),
            hole_count: 8,
            hole_diameter: 5.0,
            thickness: 5.2,
            peg_clearance: 0.3,
            peg_end_clearance: 0.3,
            pad: 0.01,
            arc_resolution: 0.5,
        }
    }
}

impl CombParams {
    /// Returns a copy of these parameters selecting `piece`.
    #[must_use]
    pub fn with_piece(mut self, piece: Piece) -> Self {
        self.piece = piece;
        self
    }

    /// Parses parameters from JSON and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] for malformed JSON, unknown
    /// fields or an unknown piece tag, and any error of [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every parameter and computes the derived dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the first offending parameter.
    pub fn validate(&self) -> Result<Dimensions, ConfigurationError> {
        Dimensions::new(self)
    }
}
