mod document;
mod node;

pub use document::{CsgDocument, NodeRecord};
pub use node::{CsgNode, NodeId, Primitive};

use crate::error::CsgError;
use slotmap::SlotMap;

/// Arena that owns every CSG node built during one construction pass.
///
/// Nodes are append-only: once inserted they are never mutated or removed,
/// so a [`NodeId`] always names the same solid. Composition inserts a new
/// node that refers to its operands, which lets many parents share one
/// child (for example a single cutter instanced across a grid).
#[derive(Debug, Default, Clone)]
pub struct CsgStore {
    nodes: SlotMap<NodeId, CsgNode>,
}

impl CsgStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node and returns its ID.
    pub fn add_node(&mut self, node: CsgNode) -> NodeId {
        self.nodes.insert(node)
    }

    /// Returns a reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in this store.
    pub fn node(&self, id: NodeId) -> Result<&CsgNode, CsgError> {
        self.nodes
            .get(id)
            .ok_or_else(|| CsgError::NodeNotFound(format!("{id:?}")))
    }

    /// Returns `true` if `id` refers to a node in this store.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the store, reachable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exports the tree rooted at `root` as a flat, serializable document.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or any node it references is missing.
    pub fn export(&self, root: NodeId) -> Result<CsgDocument, CsgError> {
        CsgDocument::from_store(self, root)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn cube(store: &mut CsgStore) -> NodeId {
        store.add_node(CsgNode::Primitive(Primitive::Cube {
            size: Vector3::new(1.0, 2.0, 3.0),
            centered: false,
        }))
    }

    #[test]
    fn inserted_nodes_are_retrievable() {
        let mut store = CsgStore::new();
        assert!(store.is_empty());
        let a = cube(&mut store);
        let b = cube(&mut store);
        let union = store.add_node(CsgNode::Union(vec![a, b]));

        assert_eq!(store.len(), 3);
        assert!(store.contains(union));
        assert_eq!(store.node(union).unwrap().children(), vec![a, b]);
    }

    #[test]
    fn foreign_id_is_not_found() {
        let mut other = CsgStore::new();
        let _ = cube(&mut other);
        let _ = cube(&mut other);
        let third = cube(&mut other);

        let mut store = CsgStore::new();
        let _ = cube(&mut store);
        assert!(!store.contains(third));
        assert!(matches!(store.node(third), Err(CsgError::NodeNotFound(_))));
    }
}
