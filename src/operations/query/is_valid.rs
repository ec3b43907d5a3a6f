use std::collections::HashSet;

use crate::csg::{CsgNode, CsgStore, NodeId, Primitive};
use crate::math::is_positive;

use super::BoundingBox;

/// Validates the structural and geometric consistency of a CSG tree.
///
/// A tree is valid when every referenced node exists, every primitive has
/// positive finite dimensions, every boolean node has the operands it
/// needs, every transform is finite and the solid's bounding box is not
/// empty.
pub struct IsValid {
    solid: NodeId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: NodeId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self, store: &CsgStore) -> bool {
        let mut seen = HashSet::new();
        let mut pending = vec![self.solid];
        while let Some(id) = pending.pop() {
            if !seen.insert(id) {
                continue;
            }
            let Ok(node) = store.node(id) else {
                return false;
            };
            if !node_is_valid(node) {
                return false;
            }
            pending.extend(node.children());
        }

        BoundingBox::new(self.solid)
            .execute(store)
            .is_ok_and(|aabb| !aabb.is_empty())
    }
}

fn node_is_valid(node: &CsgNode) -> bool {
    match node {
        CsgNode::Primitive(shape) => primitive_is_valid(shape),
        CsgNode::Union(children) | CsgNode::Intersection(children) => !children.is_empty(),
        CsgNode::Difference { cutters, .. } => !cutters.is_empty(),
        CsgNode::Transform { isometry, .. } => {
            isometry.translation.vector.iter().all(|c| c.is_finite())
                && isometry.rotation.coords.iter().all(|c| c.is_finite())
        }
    }
}

fn primitive_is_valid(shape: &Primitive) -> bool {
    match *shape {
        Primitive::Cube { size, .. } => size.iter().all(|&len| is_positive(len)),
        Primitive::Cylinder { radius, height, .. } => is_positive(radius) && is_positive(height),
        Primitive::Torus {
            major_radius,
            minor_radius,
        } => major_radius.is_finite() && major_radius >= 0.0 && is_positive(minor_radius),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::boolean::Intersect;
    use crate::operations::creation::MakeCube;
    use crate::operations::transform::Translate;

    #[test]
    fn built_tree_is_valid() {
        let mut store = CsgStore::new();
        let cube = MakeCube::new(Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let moved = Translate::new(cube, Vector3::new(0.5, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        let overlap = Intersect::new(cube, moved).execute(&mut store).unwrap();
        assert!(IsValid::new(overlap).execute(&store));
    }

    #[test]
    fn hand_built_degenerate_primitive_is_invalid() {
        let mut store = CsgStore::new();
        let flat = store.add_node(CsgNode::Primitive(Primitive::Cylinder {
            radius: 1.0,
            height: 0.0,
            centered: false,
        }));
        assert!(!IsValid::new(flat).execute(&store));
    }

    #[test]
    fn empty_intersection_is_invalid() {
        let mut store = CsgStore::new();
        let cube = MakeCube::new(Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let far = Translate::new(cube, Vector3::new(10.0, 0.0, 0.0))
            .execute(&mut store)
            .unwrap();
        let nothing = Intersect::new(cube, far).execute(&mut store).unwrap();
        assert!(!IsValid::new(nothing).execute(&store));
    }

    #[test]
    fn dangling_reference_is_invalid() {
        let mut other = CsgStore::new();
        let _ = MakeCube::new(Vector3::new(1.0, 1.0, 1.0)).execute(&mut other);
        let stranger = MakeCube::new(Vector3::new(1.0, 1.0, 1.0))
            .execute(&mut other)
            .unwrap();

        let mut store = CsgStore::new();
        let union = store.add_node(CsgNode::Union(vec![stranger]));
        assert!(!IsValid::new(union).execute(&store));
    }
}
