use tracing::{debug, instrument};

use crate::csg::{CsgStore, NodeId};
use crate::error::Result;
use crate::math::Vector3;
use crate::operations::boolean::{Intersect, Subtract, Union};
use crate::operations::creation::MakeCube;
use crate::operations::transform::Translate;
use crate::params::{Dimensions, Piece};

use super::{CombForm, Row, RowOfPegsOrHoles};

/// Longitudinal slice of the comb form kept by a piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    /// X where the slice starts.
    pub start: f64,
    /// Extent of the slice along X.
    pub width: f64,
}

impl ClipRange {
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}

/// Peg operations applied after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PegOps {
    /// Slot whose peg holes are bored into the piece.
    pub holes: Option<Row>,
    /// Slot whose pegs are added to the piece.
    pub pegs: Option<Row>,
}

/// Returns the slice of the comb form kept by `piece`, or `None` for the
/// unclipped blank.
///
/// `PegEnd` keeps the outer half of the first column, `Center` the span
/// between the two channel centre lines and `HoleEnd` the outer half of the
/// second column. The three slices tile the blank.
#[must_use]
pub fn clip_range(dims: &Dimensions, piece: Piece) -> Option<ClipRange> {
    let body = dims.torus_body_diameter;
    let end_width = body + dims.hole_radius;
    match piece {
        Piece::PegEnd => Some(ClipRange {
            start: 0.0,
            width: end_width,
        }),
        Piece::Center => Some(ClipRange {
            start: end_width,
            width: body + dims.hole_diameter,
        }),
        Piece::HoleEnd => Some(ClipRange {
            start: 2.0 * body + 3.0 * dims.hole_radius,
            width: end_width,
        }),
        Piece::TwoRowSolid => None,
    }
}

/// Returns the peg and peg-hole rows applied to `piece`.
#[must_use]
pub fn peg_ops(piece: Piece) -> PegOps {
    match piece {
        Piece::PegEnd => PegOps {
            holes: None,
            pegs: Some(Row::First),
        },
        Piece::Center => PegOps {
            holes: Some(Row::First),
            pegs: Some(Row::Second),
        },
        Piece::HoleEnd => PegOps {
            holes: Some(Row::Second),
            pegs: None,
        },
        Piece::TwoRowSolid => PegOps::default(),
    }
}

/// Builds one of the four comb pieces.
///
/// The comb form is intersected with the piece's clip box, which is grown by
/// `pad` on every side, then peg holes are bored and pegs are added.
pub struct BuildPiece {
    dims: Dimensions,
    piece: Piece,
}

impl BuildPiece {
    /// Creates a new `BuildPiece` operation.
    #[must_use]
    pub fn new(dims: &Dimensions, piece: Piece) -> Self {
        Self { dims: *dims, piece }
    }

    /// Executes the operation, returning the root of the piece.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions produce degenerate geometry.
    #[instrument(skip_all, fields(piece = %self.piece))]
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        let form = CombForm::new(&self.dims).execute(store)?;
        let Some(range) = clip_range(&self.dims, self.piece) else {
            return Ok(form);
        };

        let clip = self.clip_box(range, store)?;
        let mut solid = Intersect::new(form, clip).execute(store)?;

        let ops = peg_ops(self.piece);
        if let Some(row) = ops.holes {
            let holes = RowOfPegsOrHoles::peg_holes(&self.dims, row).execute(store)?;
            solid = Subtract::new(solid, holes).execute(store)?;
        }
        if let Some(row) = ops.pegs {
            let pegs = RowOfPegsOrHoles::pegs(&self.dims, row).execute(store)?;
            solid = Union::new(solid, pegs).execute(store)?;
        }

        debug!(
            start = range.start,
            end = range.end(),
            holes = ?ops.holes,
            pegs = ?ops.pegs,
            "clipped comb piece"
        );
        Ok(solid)
    }

    fn clip_box(&self, range: ClipRange, store: &mut CsgStore) -> Result<NodeId> {
        let pad = self.dims.pad;
        let size = Vector3::new(
            range.width + 2.0 * pad,
            self.dims.depth + 2.0 * pad,
            self.dims.thickness + 2.0 * pad,
        );
        let cube = MakeCube::new(size).execute(store)?;
        Translate::new(cube, Vector3::new(range.start - pad, -pad, -pad)).execute(store)
    }
}
