//! Nearest-node search for snap candidates.
//!
//! Closeness is measured between top-left corners, not centers. A linear
//! scan per pointer move is fine for the tens of nodes a page holds; large
//! node counts would want a spatial index here.

use crate::geometry::{distance, top_left};
use crate::registry::{NodeId, NodeRegistry};
use kurbo::Rect;

/// The node chosen as the alignment target for a drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub id: NodeId,
    /// Bounding box at the time of the search.
    pub rect: Rect,
    /// Top-left to top-left distance from the dragged node.
    pub distance: f64,
}

/// Find the node whose top-left corner is closest to the dragged node's.
///
/// `nodes` is a snapshot in registry order; the dragged node is skipped if
/// present. Returns `None` unless the minimum distance is strictly below
/// `threshold`. Equidistant nodes resolve to the first one in `nodes`.
pub fn find_closest(
    dragged: NodeId,
    dragged_rect: Rect,
    nodes: &[(NodeId, Rect)],
    threshold: f64,
) -> Option<Candidate> {
    let origin = top_left(dragged_rect);
    let mut best: Option<Candidate> = None;

    for &(id, rect) in nodes {
        if id == dragged {
            continue;
        }
        let dist = distance(origin, top_left(rect));
        if best.is_none_or(|b| dist < b.distance) {
            best = Some(Candidate { id, rect, distance: dist });
        }
    }

    best.filter(|b| b.distance < threshold)
}

/// Run [`find_closest`] against the live registry.
pub fn find_closest_in(registry: &NodeRegistry, dragged: NodeId, threshold: f64) -> Option<Candidate> {
    let dragged_rect = registry.rect(dragged)?;
    find_closest(dragged, dragged_rect, &registry.snapshot(), threshold)
}
