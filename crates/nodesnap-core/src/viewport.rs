//! Viewport module for scroll offsets.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Converts between viewport coordinates (what pointer events report) and
/// page coordinates (where nodes live).
///
/// Page = viewport + scroll. There is no zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current scroll offset of the page.
    pub scroll: Vec2,
}

impl Viewport {
    /// Create a viewport scrolled to the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a viewport point to page coordinates.
    pub fn viewport_to_page(&self, point: Point) -> Point {
        point + self.scroll
    }

    /// Replace the scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }
}
