use std::fmt;

use crate::csg::{CsgStore, NodeId};
use crate::error::{ConfigurationError, Result};
use crate::math::Vector3;
use crate::operations::pattern::RowOfCylinders;
use crate::operations::transform::Translate;
use crate::params::Dimensions;

/// One of the two longitudinal slots where pegs and peg holes sit.
///
/// Slot 1 lies on the centre line of the first channel column, slot 2 on the
/// centre line of the second. Neighbouring pieces mate across these lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    First,
    Second,
}

impl Row {
    /// One-based slot number.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Row::First => 1,
            Row::Second => 2,
        }
    }
}

impl TryFrom<u8> for Row {
    type Error = ConfigurationError;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        match index {
            1 => Ok(Row::First),
            2 => Ok(Row::Second),
            other => Err(ConfigurationError::UnknownRow(other)),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.index())
    }
}

/// X position where the cylinders of `row` start.
///
/// This is the slot's centre line pulled back by `pad`, so the cylinders
/// overlap the face they grow from or are cut into.
#[must_use]
pub fn row_offset(dims: &Dimensions, row: Row) -> f64 {
    dims.torus_body_diameter + dims.hole_radius + f64::from(row.index() - 1) * dims.pitch
        - dims.pad
}

/// Places a row of pegs or peg holes in one slot.
///
/// The row holds one cylinder per wire channel, at the channel pitch, each
/// centred on the plate mid-plane on the solid land beside a channel. Every
/// cylinder is `pad` longer than requested to make up for [`row_offset`].
pub struct RowOfPegsOrHoles {
    dims: Dimensions,
    row: Row,
    height: f64,
    diameter: f64,
}

impl RowOfPegsOrHoles {
    /// Creates a new `RowOfPegsOrHoles` operation with explicit cylinder size.
    #[must_use]
    pub fn new(dims: &Dimensions, row: Row, height: f64, diameter: f64) -> Self {
        Self {
            dims: *dims,
            row,
            height,
            diameter,
        }
    }

    /// Mating pegs that protrude from a piece face.
    #[must_use]
    pub fn pegs(dims: &Dimensions, row: Row) -> Self {
        Self::new(dims, row, dims.peg_length(), dims.peg_diameter())
    }

    /// Bores that receive the pegs of the neighbouring piece. They are wider
    /// and deeper than the pegs by the configured clearances.
    #[must_use]
    pub fn peg_holes(dims: &Dimensions, row: Row) -> Self {
        Self::new(dims, row, dims.peg_hole_depth(), dims.peg_hole_diameter())
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        row_offset(&self.dims, self.row)
    }

    /// Y position of the first cylinder axis.
    #[must_use]
    pub fn first_center_y(&self) -> f64 {
        self.dims.torus_body_radius
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Nominal cylinder length, without the `pad` overlap.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Executes the operation, adding the positioned row to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the cylinder size is degenerate.
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        let row = RowOfCylinders::new(
            self.height + self.dims.pad,
            self.diameter,
            self.dims.pitch,
            self.dims.hole_count,
        )
        .execute(store)?;

        let position = Vector3::new(
            self.offset(),
            self.first_center_y(),
            self.dims.torus_body_radius,
        );
        Translate::new(row, position).execute(store)
    }
}
