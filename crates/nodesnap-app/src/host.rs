//! Headless host that mirrors engine output the way a page would.

use crate::AppError;
use crate::trace::Trace;
use kurbo::{Point, Size};
use nodesnap_core::{DragController, DragFeedback, Node, NodeId, NodeRegistry, SnapConfig};
use std::collections::HashMap;

/// Size of every node in the default layout.
pub const DEFAULT_NODE_SIZE: Size = Size::new(50.0, 50.0);

/// Three squares in a row.
pub fn default_layout() -> Vec<Node> {
    [(100.0, 100.0), (300.0, 100.0), (500.0, 100.0)]
        .into_iter()
        .map(|(x, y)| Node::new(Point::new(x, y), DEFAULT_NODE_SIZE))
        .collect()
}

/// Pointer cursor shown over a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

impl Cursor {
    /// CSS cursor name.
    pub fn as_str(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Owns the engine and a mirror of what would be on screen.
#[derive(Debug)]
pub struct Host {
    drag: DragController,
    cursors: HashMap<NodeId, Cursor>,
    /// Every position write in order, as `(node, position)`.
    writes: Vec<(NodeId, Point)>,
}

impl Host {
    pub fn new(registry: NodeRegistry, config: SnapConfig) -> Self {
        let cursors = registry.nodes().iter().map(|n| (n.id(), Cursor::default())).collect();
        Self {
            drag: DragController::new(registry, config),
            cursors,
            writes: Vec::new(),
        }
    }

    /// Build a host for a trace, using its overrides or the defaults.
    ///
    /// Fails if the trace's layout or config does not validate.
    pub fn for_trace(trace: &Trace) -> Result<Self, AppError> {
        let config = trace.config.unwrap_or_default();
        config.validate()?;
        let nodes = trace.nodes.clone().unwrap_or_else(default_layout);
        let registry = NodeRegistry::try_new(nodes)?;
        Ok(Self::new(registry, config))
    }

    pub fn registry(&self) -> &NodeRegistry {
        self.drag.registry()
    }

    pub fn cursor(&self, id: NodeId) -> Option<Cursor> {
        self.cursors.get(&id).copied()
    }

    pub fn writes(&self) -> &[(NodeId, Point)] {
        &self.writes
    }

    /// Mirror one piece of engine feedback.
    pub fn apply(&mut self, feedback: &DragFeedback) {
        match *feedback {
            DragFeedback::Grabbed { id, replaced } => {
                if let Some(prev) = replaced {
                    self.cursors.insert(prev, Cursor::Grab);
                }
                self.cursors.insert(id, Cursor::Grabbing);
            }
            DragFeedback::Moved { id, position, .. } => {
                self.writes.push((id, position));
            }
            DragFeedback::Released { id } => {
                self.cursors.insert(id, Cursor::Grab);
            }
        }
    }

    /// Feed every event of `trace` through the engine.
    pub fn replay(&mut self, trace: &Trace) -> Vec<DragFeedback> {
        let mut events = trace.to_events(self.drag.registry());
        let feedback = self.drag.drive(&mut events);
        for item in &feedback {
            self.apply(item);
        }
        log::info!("Replayed {} events, {} position writes", trace.events.len(), self.writes.len());
        feedback
    }
}
