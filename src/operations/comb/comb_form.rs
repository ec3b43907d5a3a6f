use tracing::{debug, instrument};

use crate::csg::{CsgStore, NodeId};
use crate::error::Result;
use crate::operations::boolean::Subtract;
use crate::operations::creation::MakeCube;
use crate::operations::pattern::TorusHoleArray;
use crate::operations::transform::Translate;
use crate::params::Dimensions;

/// Builds the two-column comb blank every piece is cut from.
///
/// A plate of `[2 * pitch + body, depth, thickness]` with a 2 x N grid of
/// radiused wire channels bored through it. The first channel is centred at
/// [`Dimensions::first_channel_center`].
pub struct CombForm {
    dims: Dimensions,
}

impl CombForm {
    /// Creates a new `CombForm` operation.
    #[must_use]
    pub fn new(dims: &Dimensions) -> Self {
        Self { dims: *dims }
    }

    /// Executes the operation, adding the perforated plate to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions produce degenerate geometry.
    #[instrument(skip_all, fields(hole_count = self.dims.hole_count))]
    pub fn execute(&self, store: &mut CsgStore) -> Result<NodeId> {
        let dims = &self.dims;
        let block = MakeCube::new(dims.block_size()).execute(store)?;
        let channels = TorusHoleArray::new(
            dims.hole_radius,
            dims.torus_body_radius,
            dims.pitch,
            2,
            dims.hole_count,
            dims.pad,
        )
        .execute(store)?;
        let channels = Translate::new(channels, dims.first_channel_center().coords).execute(store)?;

        debug!(
            size = ?dims.block_size().as_slice(),
            pitch = dims.pitch,
            "assembled comb form"
        );
        Subtract::new(block, channels).execute(store)
    }
}
