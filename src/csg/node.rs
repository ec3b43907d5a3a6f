use serde::{Deserialize, Serialize};

use crate::math::{Isometry3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a node in the CSG store.
    pub struct NodeId;
}

/// A leaf solid, expressed in its own local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Primitive {
    /// Axis-aligned box. Spans `[0, size]` unless centered on the origin.
    Cube { size: Vector3, centered: bool },
    /// Circular cylinder along +Z. Spans `z` in `[0, height]` unless
    /// centered on the origin.
    Cylinder {
        radius: f64,
        height: f64,
        centered: bool,
    },
    /// Solid of revolution about Z: a circle of radius `minor_radius`
    /// centred `major_radius + minor_radius` from the axis, swept a full
    /// turn in the XY plane. `major_radius` is the radius of the bore.
    Torus { major_radius: f64, minor_radius: f64 },
}

/// A node in the CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgNode {
    Primitive(Primitive),
    Union(Vec<NodeId>),
    /// `base` with every cutter removed.
    Difference { base: NodeId, cutters: Vec<NodeId> },
    Intersection(Vec<NodeId>),
    /// `child` moved by a rigid transformation.
    Transform { child: NodeId, isometry: Isometry3 },
}

impl CsgNode {
    /// Returns the operands of this node in evaluation order.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            CsgNode::Primitive(_) => Vec::new(),
            CsgNode::Union(children) | CsgNode::Intersection(children) => children.clone(),
            CsgNode::Difference { base, cutters } => {
                let mut children = Vec::with_capacity(cutters.len() + 1);
                children.push(*base);
                children.extend_from_slice(cutters);
                children
            }
            CsgNode::Transform { child, .. } => vec![*child],
        }
    }
}
