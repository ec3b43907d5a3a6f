use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CsgError;
use crate::math::Vector3;

use super::{CsgNode, CsgStore, NodeId, Primitive};

/// Flat, serializable form of a CSG tree handed to a geometry kernel.
///
/// Nodes are listed children-first, so every index a record refers to is
/// smaller than the record's own index. Shared subtrees appear once and are
/// referenced by index from each parent. `root` is always the last node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsgDocument {
    pub nodes: Vec<NodeRecord>,
    pub root: usize,
}

/// One node of a [`CsgDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum NodeRecord {
    Primitive {
        shape: Primitive,
    },
    Union {
        children: Vec<usize>,
    },
    Difference {
        base: usize,
        cutters: Vec<usize>,
    },
    Intersection {
        children: Vec<usize>,
    },
    /// Rotation as a unit quaternion `[i, j, k, w]`, applied before the
    /// translation.
    Transform {
        child: usize,
        translation: Vector3,
        rotation: [f64; 4],
    },
}

impl CsgDocument {
    pub(super) fn from_store(store: &CsgStore, root: NodeId) -> Result<Self, CsgError> {
        let mut exporter = Exporter {
            store,
            indices: HashMap::new(),
            nodes: Vec::new(),
        };
        let root = exporter.visit(root)?;
        Ok(Self {
            nodes: exporter.nodes,
            root,
        })
    }

    /// Number of distinct nodes in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parents referring to node `index`.
    #[must_use]
    pub fn reference_count(&self, index: usize) -> usize {
        self.nodes
            .iter()
            .flat_map(NodeRecord::children)
            .filter(|&child| child == index)
            .count()
    }

    /// Serializes the document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl NodeRecord {
    /// Indices of this record's operands.
    #[must_use]
    pub fn children(&self) -> Vec<usize> {
        match self {
            NodeRecord::Primitive { .. } => Vec::new(),
            NodeRecord::Union { children } | NodeRecord::Intersection { children } => {
                children.clone()
            }
            NodeRecord::Difference { base, cutters } => {
                std::iter::once(*base).chain(cutters.iter().copied()).collect()
            }
            NodeRecord::Transform { child, .. } => vec![*child],
        }
    }
}

struct Exporter<'a> {
    store: &'a CsgStore,
    indices: HashMap<NodeId, usize>,
    nodes: Vec<NodeRecord>,
}

impl Exporter<'_> {
    fn visit(&mut self, id: NodeId) -> Result<usize, CsgError> {
        if let Some(&index) = self.indices.get(&id) {
            return Ok(index);
        }

        let store = self.store;
        let record = match store.node(id)? {
            CsgNode::Primitive(shape) => NodeRecord::Primitive { shape: *shape },
            CsgNode::Union(children) => NodeRecord::Union {
                children: self.visit_all(children)?,
            },
            CsgNode::Difference { base, cutters } => {
                let base = self.visit(*base)?;
                NodeRecord::Difference {
                    base,
                    cutters: self.visit_all(cutters)?,
                }
            }
            CsgNode::Intersection(children) => NodeRecord::Intersection {
                children: self.visit_all(children)?,
            },
            CsgNode::Transform { child, isometry } => {
                let child = self.visit(*child)?;
                let q = isometry.rotation.quaternion().coords;
                NodeRecord::Transform {
                    child,
                    translation: isometry.translation.vector,
                    rotation: [q.x, q.y, q.z, q.w],
                }
            }
        };

        let index = self.nodes.len();
        self.nodes.push(record);
        self.indices.insert(id, index);
        Ok(index)
    }

    fn visit_all(&mut self, ids: &[NodeId]) -> Result<Vec<usize>, CsgError> {
        ids.iter().map(|&id| self.visit(id)).collect()
    }
}
