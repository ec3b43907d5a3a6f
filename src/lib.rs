//! Parametric CSG construction of a wire comb.
//!
//! A wire comb is a rectangular plate with two rows of radiused channels
//! that guide a bundle of wires. [`build_piece`] turns a [`CombParams`]
//! into a CSG tree for one printable piece; a [`GeometryKernel`] turns the
//! exported tree into a mesh.

pub mod csg;
pub mod error;
pub mod math;
pub mod operations;
pub mod params;
pub mod tessellation;

pub use error::{Result, WireCombError};
pub use operations::comb::{build_piece, CombPiece};
pub use params::{CombParams, Dimensions, Piece};
pub use tessellation::{EvaluatePiece, GeometryKernel, TessellationParams, TriangleMesh};
