use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::error::Result;
use crate::math::{Isometry3, Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// A box containing nothing; the identity for [`Aabb::union`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Edge lengths, zero for an empty box.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        if self.is_empty() {
            Vector3::zeros()
        } else {
            self.max - self.min
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Overlap of both boxes, possibly empty.
    #[must_use]
    pub fn intersection(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.sup(&other.min),
            max: self.max.inf(&other.max),
        }
    }

    /// Box containing this box after a rigid transformation.
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry3) -> Aabb {
        if self.is_empty() {
            return *self;
        }
        self.corners()
            .iter()
            .map(|corner| isometry.transform_point(corner))
            .fold(Aabb::empty(), |acc, p| acc.union(&Aabb::new(p, p)))
    }

    fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Computes the axis-aligned bounding box of a CSG tree.
///
/// Primitive boxes are exact. A union takes the union of its operands'
/// boxes, an intersection their overlap and a difference the box of its
/// base, so the result always contains the solid but may be loose where
/// cutters trim the base.
pub struct BoundingBox {
    solid: NodeId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: NodeId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree refers to a node outside the store.
    pub fn execute(&self, store: &CsgStore) -> Result<Aabb> {
        node_aabb(store, self.solid)
    }
}

fn node_aabb(store: &CsgStore, id: NodeId) -> Result<Aabb> {
    let aabb = match store.node(id)? {
        CsgNode::Primitive(shape) => primitive_aabb(shape),
        CsgNode::Union(children) => {
            let mut acc = Aabb::empty();
            for &child in children {
                acc = acc.union(&node_aabb(store, child)?);
            }
            acc
        }
        CsgNode::Intersection(children) => {
            let mut acc: Option<Aabb> = None;
            for &child in children {
                let child = node_aabb(store, child)?;
                acc = Some(acc.map_or(child, |acc| acc.intersection(&child)));
            }
            acc.unwrap_or_else(Aabb::empty)
        }
        CsgNode::Difference { base, .. } => node_aabb(store, *base)?,
        CsgNode::Transform { child, isometry } => node_aabb(store, *child)?.transformed(isometry),
    };
    Ok(aabb)
}

/// Exact bounds of a primitive in its local frame.
#[must_use]
pub fn primitive_aabb(shape: &Primitive) -> Aabb {
    match *shape {
        Primitive::Cube { size, centered } => {
            let min = if centered {
                Point3::from(-size / 2.0)
            } else {
                Point3::origin()
            };
            Aabb::new(min, min + size)
        }
        Primitive::Cylinder {
            radius,
            height,
            centered,
        } => {
            let z0 = if centered { -height / 2.0 } else { 0.0 };
            Aabb::new(
                Point3::new(-radius, -radius, z0),
                Point3::new(radius, radius, z0 + height),
            )
        }
        Primitive::Torus {
            major_radius,
            minor_radius,
        } => {
            let outer = major_radius + 2.0 * minor_radius;
            Aabb::new(
                Point3::new(-outer, -outer, -minor_radius),
                Point3::new(outer, outer, minor_radius),
            )
        }
    }
}
