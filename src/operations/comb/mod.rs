mod build;
mod comb_form;
mod piece;
mod row_placement;

pub use build::{build_piece, CombPiece};
pub use comb_form::CombForm;
pub use piece::{clip_range, peg_ops, BuildPiece, ClipRange, PegOps};
pub use row_placement::{row_offset, Row, RowOfPegsOrHoles};
