//! Snap functionality for aligning a dragged node to another node or to the page.
//!
//! Each axis is resolved on its own. The dragged rectangle's start edge,
//! end edge and centerline are compared with the reference rectangle's, in
//! that order, and the first one within the edge threshold wins. A match
//! moves the node so the two lines coincide exactly.

use crate::geometry::{Axis, AxisLines};
use crate::registry::{Node, NodeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Which reference line an axis snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapLine {
    /// Left or top edges aligned.
    Start,
    /// Right or bottom edges aligned.
    End,
    /// Centerlines aligned.
    Center,
}

/// What a drag step was snapped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapTarget {
    /// The closest other node.
    Node(NodeId),
    /// The container bounds.
    Page,
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The corrected top-left position.
    pub point: Point,
    /// Line matched on the horizontal axis, if any.
    pub line_x: Option<SnapLine>,
    /// Line matched on the vertical axis, if any.
    pub line_y: Option<SnapLine>,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            line_x: None,
            line_y: None,
        }
    }

    /// Whether the X coordinate was snapped.
    pub fn snapped_x(&self) -> bool {
        self.line_x.is_some()
    }

    /// Whether the Y coordinate was snapped.
    pub fn snapped_y(&self) -> bool {
        self.line_y.is_some()
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x() || self.snapped_y()
    }
}

/// Resolve one axis. Returns the matched line and the new start coordinate.
fn snap_axis(dragged: AxisLines, reference: AxisLines, threshold: f64) -> Option<(SnapLine, f64)> {
    if (dragged.start - reference.start).abs() < threshold {
        Some((SnapLine::Start, reference.start))
    } else if (dragged.end - reference.end).abs() < threshold {
        Some((SnapLine::End, reference.end - dragged.span()))
    } else if (dragged.center - reference.center).abs() < threshold {
        Some((SnapLine::Center, reference.center - dragged.span() / 2.0))
    } else {
        None
    }
}

/// Compute the snapped top-left of `rect` against `reference`.
///
/// Axes without a match keep their original coordinate.
pub fn snap_rect(rect: Rect, reference: Rect, threshold: f64) -> SnapResult {
    let mut result = SnapResult::none(Point::new(rect.x0, rect.y0));

    let horizontal = snap_axis(
        AxisLines::of(rect, Axis::Horizontal),
        AxisLines::of(reference, Axis::Horizontal),
        threshold,
    );
    if let Some((line, x)) = horizontal {
        result.point.x = x;
        result.line_x = Some(line);
    }

    let vertical = snap_axis(
        AxisLines::of(rect, Axis::Vertical),
        AxisLines::of(reference, Axis::Vertical),
        threshold,
    );
    if let Some((line, y)) = vertical {
        result.point.y = y;
        result.line_y = Some(line);
    }

    result
}

/// Write the snapped axes of `result` into the node.
fn apply(node: &mut Node, result: &SnapResult) {
    if result.snapped_x() {
        node.position.x = result.point.x;
    }
    if result.snapped_y() {
        node.position.y = result.point.y;
    }
}

/// Align the dragged node's edges or center with a candidate node's.
pub fn snap_to_node(dragged: &mut Node, candidate: Rect, threshold: f64) -> SnapResult {
    let result = snap_rect(dragged.rect(), candidate, threshold);
    apply(dragged, &result);
    result
}

/// Align the dragged node's edges or center with the container bounds.
pub fn snap_to_page(dragged: &mut Node, bounds: Rect, threshold: f64) -> SnapResult {
    let result = snap_rect(dragged.rect(), bounds, threshold);
    apply(dragged, &result);
    result
}
