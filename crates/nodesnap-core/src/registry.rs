//! Fixed collection of draggable nodes.

use crate::config::{ConfigError, ConfigResult};
use crate::geometry::rect_of;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a node.
pub type NodeId = Uuid;

/// A draggable rectangle with a mutable position and a fixed size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: NodeId,
    /// Top-left corner in page coordinates.
    pub position: Point,
    /// Width and height.
    pub size: Size,
}

impl Node {
    /// Create a node with a fresh id.
    pub fn new(position: Point, size: Size) -> Self {
        Self::with_id(Uuid::new_v4(), position, size)
    }

    /// Create a node with a host-supplied id.
    pub fn with_id(id: NodeId, position: Point, size: Size) -> Self {
        Self { id, position, size }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current bounding box.
    pub fn rect(&self) -> Rect {
        rect_of(self)
    }

    /// Position must be finite; size must be finite and non-negative, so
    /// that the rectangle's left/top edge is the position.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(ConfigError::Invalid(format!("node {} has a non-finite position", self.id)));
        }
        let Size { width, height } = self.size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "node {} must have a non-negative size, got {}x{}",
                self.id, width, height
            )));
        }
        Ok(())
    }
}

/// Owns the authoritative position of every node.
///
/// Membership is fixed at construction. Iteration follows creation order,
/// which is also the tie-break order for proximity search.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    /// Build a registry from a layout already known to be valid.
    ///
    /// Use [`NodeRegistry::try_new`] for layouts from outside the program.
    pub fn new(nodes: Vec<Node>) -> Self {
        debug_assert!(Self::validate_layout(&nodes).is_ok(), "invalid node layout");
        Self { nodes }
    }

    /// Build a registry, rejecting invalid nodes and duplicate ids.
    pub fn try_new(nodes: Vec<Node>) -> ConfigResult<Self> {
        Self::validate_layout(&nodes)?;
        Ok(Self { nodes })
    }

    /// Check every node and that ids are unique.
    pub fn validate_layout(nodes: &[Node]) -> ConfigResult<()> {
        let mut seen = HashSet::with_capacity(nodes.len());
        for node in nodes {
            node.validate()?;
            if !seen.insert(node.id) {
                return Err(ConfigError::Invalid(format!("duplicate node id {}", node.id)));
            }
        }
        Ok(())
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Mutable access for the engine. Only the position is ever written.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Node id at a creation-order index.
    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).map(Node::id)
    }

    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.get(id).map(|n| n.position)
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.get(id).map(Node::rect)
    }

    /// Write a node's position. Visible to the next read immediately.
    /// Returns false if the id is unknown.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Snapshot of every node's id and bounding box, in creation order.
    pub fn snapshot(&self) -> Vec<(NodeId, Rect)> {
        self.nodes.iter().map(|n| (n.id, n.rect())).collect()
    }
}
