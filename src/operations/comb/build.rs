use tracing::{debug, instrument};

use crate::csg::{CsgDocument, CsgStore, NodeId};
use crate::error::Result;
use crate::params::{CombParams, Dimensions, Piece};

use super::BuildPiece;

/// The result of one construction pass: a piece and the store that owns it.
#[derive(Debug, Clone)]
pub struct CombPiece {
    pub piece: Piece,
    pub dimensions: Dimensions,
    pub store: CsgStore,
    pub root: NodeId,
}

impl CombPiece {
    /// Exports the piece as a flat document for a geometry kernel.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree refers to a node outside the store.
    pub fn document(&self) -> Result<CsgDocument> {
        Ok(self.store.export(self.root)?)
    }
}

/// Validates `params` and builds the selected piece in a fresh store.
///
/// Identical parameters always produce structurally identical trees.
///
/// # Errors
///
/// Returns a configuration error before any geometry is built if a
/// parameter is invalid, or a geometry error if construction fails.
#[instrument(skip_all, fields(piece = %params.piece, hole_count = params.hole_count))]
pub fn build_piece(params: &CombParams) -> Result<CombPiece> {
    let dimensions = params.validate()?;
    debug!(
        hole_radius = dimensions.hole_radius,
        torus_body_radius = dimensions.torus_body_radius,
        pitch = dimensions.pitch,
        depth = dimensions.depth,
        "derived comb dimensions"
    );

    let mut store = CsgStore::new();
    let root = BuildPiece::new(&dimensions, params.piece).execute(&mut store)?;
    debug!(nodes = store.len(), "built comb piece");

    Ok(CombPiece {
        piece: params.piece,
        dimensions,
        store,
        root,
    })
}
