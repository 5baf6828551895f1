//! Drag state machine: press, move, release.

use crate::config::SnapConfig;
use crate::input::{EventSource, PointerEvent};
use crate::proximity::find_closest;
use crate::registry::{NodeId, NodeRegistry};
use crate::snap::{SnapResult, SnapTarget, snap_to_node, snap_to_page};
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The node being dragged.
    pub node: NodeId,
    /// Pointer offset from the node's top-left at grab time, in page units.
    pub grab_offset: Vec2,
}

/// State of the drag controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A node is being dragged.
    Dragging(DragSession),
}

/// What a handled event changed, for the rendering layer to mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragFeedback {
    /// A node was grabbed. `replaced` is the node whose session was taken
    /// over by this press, if it was a different one.
    Grabbed { id: NodeId, replaced: Option<NodeId> },
    /// The dragged node moved.
    Moved {
        id: NodeId,
        /// Follow-the-pointer position before snapping.
        raw: Point,
        /// Final position written to the registry.
        position: Point,
        /// What the step was snapped against.
        target: SnapTarget,
        snap: SnapResult,
    },
    /// The drag ended. The node keeps its last position.
    Released { id: NodeId },
}

/// Drives node positions from pointer events.
///
/// At most one session exists at a time. Misuse (move or release with no
/// session, press on an unknown node) is ignored.
#[derive(Debug, Clone)]
pub struct DragController {
    registry: NodeRegistry,
    config: SnapConfig,
    viewport: Viewport,
    state: DragState,
}

impl DragController {
    pub fn new(registry: NodeRegistry, config: SnapConfig) -> Self {
        Self {
            registry,
            config,
            viewport: Viewport::new(),
            state: DragState::Idle,
        }
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Update the page scroll offset. Applies from the next move on.
    pub fn set_scroll(&mut self, offset: Vec2) {
        self.viewport.set_scroll(offset);
    }

    /// Start (or take over) a drag on `node`. `position` is in viewport space.
    pub fn press(&mut self, node: NodeId, position: Point) -> Option<DragFeedback> {
        let Some(origin) = self.registry.position(node) else {
            log::debug!("Press on unknown node {} ignored", node);
            return None;
        };

        let pointer = self.viewport.viewport_to_page(position);
        let replaced = self.session().map(|s| s.node).filter(|&prev| prev != node);
        if let Some(prev) = replaced {
            log::debug!("Drag redirected from {} to {}", prev, node);
        }

        let session = DragSession {
            node,
            grab_offset: pointer - origin,
        };
        log::debug!("Drag started on {} with grab offset {:?}", node, session.grab_offset);
        self.state = DragState::Dragging(session);

        Some(DragFeedback::Grabbed { id: node, replaced })
    }

    /// Move the dragged node to follow the pointer, then snap it.
    pub fn move_to(&mut self, position: Point) -> Option<DragFeedback> {
        let session = *self.session()?;
        let raw = self.viewport.viewport_to_page(position) - session.grab_offset;

        self.registry.set_position(session.node, raw);

        // One geometry snapshot per step, taken after the raw write.
        let snapshot = self.registry.snapshot();
        let dragged_rect = self.registry.rect(session.node)?;
        let candidate = find_closest(session.node, dragged_rect, &snapshot, self.config.proximity_threshold);

        let edge = self.config.edge_threshold;
        let bounds = self.config.container_bounds();
        let node = self.registry.get_mut(session.node)?;
        let (target, snap) = match candidate {
            Some(candidate) => (SnapTarget::Node(candidate.id), snap_to_node(node, candidate.rect, edge)),
            None => (SnapTarget::Page, snap_to_page(node, bounds, edge)),
        };
        let final_position = node.position;

        log::trace!(
            "Drag {} raw {:?} -> {:?} against {:?} (x: {:?}, y: {:?})",
            session.node,
            raw,
            final_position,
            target,
            snap.line_x,
            snap.line_y
        );

        Some(DragFeedback::Moved {
            id: session.node,
            raw,
            position: final_position,
            target,
            snap,
        })
    }

    /// End the active drag, if any.
    pub fn release(&mut self) -> Option<DragFeedback> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                log::debug!("Drag ended on {}", session.node);
                Some(DragFeedback::Released { id: session.node })
            }
            DragState::Idle => {
                log::debug!("Release with no active drag ignored");
                None
            }
        }
    }

    /// Process a pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<DragFeedback> {
        match event {
            PointerEvent::Press { node, position } => self.press(node, position),
            PointerEvent::Move { position } => self.move_to(position),
            PointerEvent::Release => self.release(),
            PointerEvent::Scroll { offset } => {
                self.set_scroll(offset);
                None
            }
        }
    }

    /// Drain an event source, collecting the feedback of every event that
    /// changed something.
    pub fn drive(&mut self, source: &mut impl EventSource) -> Vec<DragFeedback> {
        let mut feedback = Vec::new();
        while let Some(event) = source.next_event() {
            feedback.extend(self.handle_event(event));
        }
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RecordedEvents;
    use crate::registry::Node;
    use crate::snap::SnapLine;
    use kurbo::Size;

    fn controller(positions: &[(f64, f64)]) -> (DragController, Vec<NodeId>) {
        let nodes: Vec<Node> = positions
            .iter()
            .map(|&(x, y)| Node::new(Point::new(x, y), Size::new(50.0, 50.0)))
            .collect();
        let ids = nodes.iter().map(Node::id).collect();
        (DragController::new(NodeRegistry::new(nodes), SnapConfig::default()), ids)
    }

    #[test]
    fn test_starts_idle() {
        let (drag, _) = controller(&[(100.0, 100.0)]);
        assert_eq!(drag.state(), DragState::Idle);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_press_records_grab_offset() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);

        let feedback = drag.press(ids[0], Point::new(110.0, 125.0));
        assert_eq!(feedback, Some(DragFeedback::Grabbed { id: ids[0], replaced: None }));

        let session = drag.session().unwrap();
        assert_eq!(session.node, ids[0]);
        assert_eq!(session.grab_offset, Vec2::new(10.0, 25.0));
    }

    #[test]
    fn test_press_does_not_move_node() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(110.0, 125.0));
        assert_eq!(drag.registry().position(ids[0]), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_move_follows_pointer_without_snap() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(110.0, 110.0));

        let feedback = drag.move_to(Point::new(210.0, 160.0)).unwrap();
        let DragFeedback::Moved { raw, position, target, snap, .. } = feedback else {
            panic!("expected a move");
        };
        assert_eq!(raw, Point::new(200.0, 150.0));
        assert_eq!(position, raw);
        assert_eq!(target, SnapTarget::Page);
        assert!(!snap.is_snapped());
        assert_eq!(drag.registry().position(ids[0]), Some(Point::new(200.0, 150.0)));
    }

    #[test]
    fn test_move_snaps_to_candidate() {
        let (mut drag, ids) = controller(&[(100.0, 100.0), (300.0, 100.0)]);
        drag.press(ids[0], Point::new(100.0, 100.0));

        let feedback = drag.move_to(Point::new(295.0, 100.0)).unwrap();
        let DragFeedback::Moved { raw, position, target, snap, .. } = feedback else {
            panic!("expected a move");
        };
        assert_eq!(raw, Point::new(295.0, 100.0));
        assert_eq!(position, Point::new(300.0, 100.0));
        assert_eq!(target, SnapTarget::Node(ids[1]));
        assert_eq!(snap.line_x, Some(SnapLine::Start));
    }

    #[test]
    fn test_move_snaps_to_page() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(120.0, 120.0));
        drag.move_to(Point::new(24.0, 24.0));
        assert_eq!(drag.registry().position(ids[0]), Some(Point::ZERO));
    }

    #[test]
    fn test_move_accounts_for_scroll() {
        let (mut drag, ids) = controller(&[(100.0, 400.0)]);
        drag.set_scroll(Vec2::new(0.0, 300.0));

        // Node at page y=400 shows at viewport y=100.
        drag.press(ids[0], Point::new(110.0, 110.0));
        assert_eq!(drag.session().unwrap().grab_offset, Vec2::new(10.0, 10.0));

        // Scrolling mid-drag keeps the node under the pointer.
        drag.handle_event(PointerEvent::Scroll { offset: Vec2::new(0.0, 340.0) });
        drag.move_to(Point::new(210.0, 110.0));
        assert_eq!(drag.registry().position(ids[0]), Some(Point::new(200.0, 440.0)));
    }

    #[test]
    fn test_release_ends_session_and_keeps_position() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(100.0, 100.0));
        drag.move_to(Point::new(204.0, 204.0));
        let before = drag.registry().position(ids[0]);

        assert_eq!(drag.release(), Some(DragFeedback::Released { id: ids[0] }));
        assert!(!drag.is_dragging());
        assert_eq!(drag.registry().position(ids[0]), before);

        // Moves after release do nothing.
        assert_eq!(drag.move_to(Point::new(500.0, 500.0)), None);
        assert_eq!(drag.registry().position(ids[0]), before);
    }

    #[test]
    fn test_misuse_is_ignored() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);

        assert_eq!(drag.release(), None);
        assert_eq!(drag.move_to(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.press(uuid::Uuid::new_v4(), Point::new(1.0, 1.0)), None);
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.registry().position(ids[0]), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_unknown_press_keeps_active_session() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(100.0, 100.0));
        drag.press(uuid::Uuid::new_v4(), Point::new(0.0, 0.0));
        assert_eq!(drag.session().unwrap().node, ids[0]);
    }

    #[test]
    fn test_last_press_wins() {
        let (mut drag, ids) = controller(&[(100.0, 100.0), (500.0, 300.0)]);
        drag.press(ids[0], Point::new(100.0, 100.0));
        drag.move_to(Point::new(200.0, 200.0));
        let a_position = drag.registry().position(ids[0]);

        let feedback = drag.press(ids[1], Point::new(500.0, 300.0));
        assert_eq!(feedback, Some(DragFeedback::Grabbed { id: ids[1], replaced: Some(ids[0]) }));

        drag.move_to(Point::new(650.0, 450.0));
        assert_eq!(drag.registry().position(ids[0]), a_position);
        assert_eq!(drag.registry().position(ids[1]), Some(Point::new(650.0, 450.0)));
    }

    #[test]
    fn test_repress_same_node_refreshes_offset() {
        let (mut drag, ids) = controller(&[(100.0, 100.0)]);
        drag.press(ids[0], Point::new(110.0, 110.0));
        let feedback = drag.press(ids[0], Point::new(130.0, 140.0));

        assert_eq!(feedback, Some(DragFeedback::Grabbed { id: ids[0], replaced: None }));
        assert_eq!(drag.session().unwrap().grab_offset, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_drive_collects_feedback() {
        let (mut drag, ids) = controller(&[(100.0, 100.0), (300.0, 100.0)]);
        let mut source = RecordedEvents::new([
            PointerEvent::Release,
            PointerEvent::Press { node: ids[0], position: Point::new(125.0, 125.0) },
            PointerEvent::Move { position: Point::new(200.0, 125.0) },
            PointerEvent::Move { position: Point::new(320.0, 125.0) },
            PointerEvent::Release,
        ]);

        let feedback = drag.drive(&mut source);
        assert_eq!(feedback.len(), 4);
        assert!(matches!(feedback[0], DragFeedback::Grabbed { .. }));
        assert!(matches!(feedback[3], DragFeedback::Released { .. }));
        assert_eq!(drag.registry().position(ids[0]), Some(Point::new(300.0, 100.0)));
    }
}
