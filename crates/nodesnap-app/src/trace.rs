//! Recorded pointer traces in JSON.
//!
//! ```json
//! {
//!   "config": { "edgeThreshold": 20 },
//!   "events": [
//!     { "type": "press", "node": 0, "x": 110, "y": 110 },
//!     { "type": "move", "x": 305, "y": 112 },
//!     { "type": "release" }
//!   ]
//! }
//! ```

use crate::AppError;
use kurbo::{Point, Vec2};
use nodesnap_core::{Node, NodeRegistry, PointerEvent, RecordedEvents, SnapConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded event. Presses name the node by its index in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Press { node: usize, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    Scroll { x: f64, y: f64 },
}

/// A replayable session: optional config and layout overrides plus events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub config: Option<SnapConfig>,
    #[serde(default)]
    pub nodes: Option<Vec<Node>>,
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let trace: Self = serde_json::from_str(json)?;
        if let Some(config) = &trace.config {
            config.validate()?;
        }
        if let Some(nodes) = &trace.nodes {
            NodeRegistry::validate_layout(nodes)?;
        }
        Ok(trace)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Drag the first node next to the second, then the third towards the
    /// page's right edge.
    pub fn demo() -> Self {
        Self {
            config: None,
            nodes: None,
            events: vec![
                TraceEvent::Press { node: 0, x: 110.0, y: 110.0 },
                TraceEvent::Move { x: 200.0, y: 130.0 },
                TraceEvent::Move { x: 305.0, y: 112.0 },
                TraceEvent::Release,
                TraceEvent::Press { node: 2, x: 525.0, y: 125.0 },
                TraceEvent::Move { x: 650.0, y: 300.0 },
                TraceEvent::Move { x: 788.0, y: 400.0 },
                TraceEvent::Release,
            ],
        }
    }

    /// Resolve node indices against `registry` and queue the events.
    ///
    /// Presses on an index outside the layout are dropped.
    pub fn to_events(&self, registry: &NodeRegistry) -> RecordedEvents {
        let mut events = RecordedEvents::default();
        for event in &self.events {
            let pointer_event = match *event {
                TraceEvent::Press { node, x, y } => match registry.id_at(node) {
                    Some(id) => PointerEvent::Press { node: id, position: Point::new(x, y) },
                    None => {
                        log::warn!("Trace presses node {} but the layout has {} nodes", node, registry.len());
                        continue;
                    }
                },
                TraceEvent::Move { x, y } => PointerEvent::Move { position: Point::new(x, y) },
                TraceEvent::Release => PointerEvent::Release,
                TraceEvent::Scroll { x, y } => PointerEvent::Scroll { offset: Vec2::new(x, y) },
            };
            events.push(pointer_event);
        }
        events
    }
}
