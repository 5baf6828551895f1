//! Geometry helpers over axis-aligned rectangles.

use crate::registry::Node;
use kurbo::{Point, Rect};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Current bounding box of a node, derived from its position and size.
pub fn rect_of(node: &Node) -> Rect {
    Rect::from_origin_size(node.position, node.size)
}

/// Top-left corner of a rectangle.
pub fn top_left(rect: Rect) -> Point {
    Point::new(rect.x0, rect.y0)
}

/// Axis of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left, center-x, right.
    Horizontal,
    /// Top, center-y, bottom.
    Vertical,
}

/// The three reference lines of a rectangle along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLines {
    /// Left or top edge.
    pub start: f64,
    /// Horizontal or vertical centerline.
    pub center: f64,
    /// Right or bottom edge.
    pub end: f64,
}

impl AxisLines {
    /// Extract the reference lines of `rect` along `axis`.
    pub fn of(rect: Rect, axis: Axis) -> Self {
        let (start, end) = match axis {
            Axis::Horizontal => (rect.x0, rect.x1),
            Axis::Vertical => (rect.y0, rect.y1),
        };
        Self {
            start,
            center: (start + end) / 2.0,
            end,
        }
    }

    /// Extent of the rectangle along this axis.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}
