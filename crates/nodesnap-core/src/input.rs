//! Pointer events delivered to the drag engine.

use crate::registry::NodeId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Pointer event type. Positions are in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed on a node's surface.
    Press { node: NodeId, position: Point },
    /// Pointer moved anywhere.
    Move { position: Point },
    /// Pointer released anywhere.
    Release,
    /// Page scrolled to an absolute offset.
    Scroll { offset: Vec2 },
}

/// A source of pointer events, in delivery order.
///
/// Hosts adapt their UI runtime's callbacks to this so the engine never
/// touches a real input surface.
pub trait EventSource {
    /// Next event, or `None` when the source is exhausted.
    fn next_event(&mut self) -> Option<PointerEvent>;
}

/// Pre-recorded events, replayed in order.
#[derive(Debug, Clone, Default)]
pub struct RecordedEvents {
    events: VecDeque<PointerEvent>,
}

impl RecordedEvents {
    pub fn new(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for RecordedEvents {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }
}
