use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::operations::boolean::BooleanOp;

/// Distance within which a point counts as lying on a surface.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

impl PointClassification {
    fn from_signed_distance(distance: f64) -> Self {
        if distance > BOUNDARY_TOLERANCE {
            PointClassification::Outside
        } else if distance < -BOUNDARY_TOLERANCE {
            PointClassification::Inside
        } else {
            PointClassification::OnBoundary
        }
    }
}

/// Classifies a point as inside, outside, or on the boundary of a CSG tree.
///
/// Primitives are tested exactly; boolean nodes combine their operands'
/// classifications with [`BooleanOp::combine`], stopping early once the
/// result cannot change.
///
/// # Errors
///
/// Returns an error if the tree refers to a node outside the store.
pub fn classify_point(
    point: &Point3,
    solid: NodeId,
    store: &CsgStore,
) -> Result<PointClassification> {
    use PointClassification::{Inside, Outside};

    let classification = match store.node(solid)? {
        CsgNode::Primitive(shape) => classify_primitive(shape, point),
        CsgNode::Union(children) => {
            let mut acc = Outside;
            for &child in children {
                acc = BooleanOp::Union.combine(acc, classify_point(point, child, store)?);
                if acc == Inside {
                    break;
                }
            }
            acc
        }
        CsgNode::Intersection(children) => {
            let mut acc = Inside;
            for &child in children {
                acc = BooleanOp::Intersect.combine(acc, classify_point(point, child, store)?);
                if acc == Outside {
                    break;
                }
            }
            acc
        }
        CsgNode::Difference { base, cutters } => {
            let mut acc = classify_point(point, *base, store)?;
            for &cutter in cutters {
                if acc == Outside {
                    break;
                }
                acc = BooleanOp::Subtract.combine(acc, classify_point(point, cutter, store)?);
            }
            acc
        }
        CsgNode::Transform { child, isometry } => {
            classify_point(&isometry.inverse_transform_point(point), *child, store)?
        }
    };
    Ok(classification)
}

/// Classifies a point given in the primitive's local frame.
#[must_use]
pub fn classify_primitive(shape: &Primitive, point: &Point3) -> PointClassification {
    let distance = match *shape {
        Primitive::Cube { size, centered } => {
            let min = if centered { -size / 2.0 } else { Vector3::zeros() };
            let max = min + size;
            (0..3)
                .map(|axis| (min[axis] - point[axis]).max(point[axis] - max[axis]))
                .fold(f64::NEG_INFINITY, f64::max)
        }
        Primitive::Cylinder {
            radius,
            height,
            centered,
        } => {
            let z0 = if centered { -height / 2.0 } else { 0.0 };
            let radial = point.x.hypot(point.y) - radius;
            let axial = (z0 - point.z).max(point.z - (z0 + height));
            radial.max(axial)
        }
        Primitive::Torus {
            major_radius,
            minor_radius,
        } => {
            let ring = major_radius + minor_radius;
            (point.x.hypot(point.y) - ring).hypot(point.z) - minor_radius
        }
    };
    PointClassification::from_signed_distance(distance)
}
