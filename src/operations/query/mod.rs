mod bounding_box;
mod classify;
mod is_valid;
mod volume;

pub use bounding_box::{primitive_aabb, Aabb, BoundingBox};
pub use classify::{classify_point, classify_primitive, PointClassification, BOUNDARY_TOLERANCE};
pub use is_valid::IsValid;
pub use volume::Volume;
