use crate::error::SimError;
use crate::types::NodeId;
use glam::Vec2;

/// A point in the growing vein structure.
///
/// Positions are fixed at creation; the tree topology is carried as a
/// parent back-reference only (the root has none), which keeps ancestor
/// walks O(1) per hop and the arena free of ownership cycles.
#[derive(Debug, Clone, Copy)]
pub struct VeinNode {
    pub pos: Vec2,
    pub parent: Option<NodeId>,
}

/// Arena of vein nodes, rooted at id 0.
///
/// Ids are assigned in creation order, so `parent < child` holds for
/// every non-root node. The pipe-model pass relies on that ordering for
/// its bottom-up traversal.
#[derive(Debug)]
pub struct VeinTree {
    pub nodes: Vec<VeinNode>,
}

impl VeinTree {
    /// A tree containing only the root node at `root_pos`.
    pub fn new(root_pos: Vec2) -> Self {
        Self {
            nodes: vec![VeinNode {
                pos: root_pos,
                parent: None,
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a child of `parent` at `pos` and returns its id.
    ///
    /// ### Errors
    /// [`SimError::BadParent`] if `parent` does not name an existing
    /// node; a well-formed tree never references forward.
    pub fn add_child(&mut self, parent: NodeId, pos: Vec2) -> Result<NodeId, SimError> {
        let id = self.nodes.len();
        if parent >= id {
            return Err(SimError::BadParent { parent, next: id });
        }
        self.nodes.push(VeinNode {
            pos,
            parent: Some(parent),
        });
        Ok(id)
    }

    /// Parent id of `id`, or `None` for the root.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// All `(child, parent)` edges.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, n)| n.parent.map(|p| (id, p)))
    }
}
