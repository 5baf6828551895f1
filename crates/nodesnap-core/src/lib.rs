//! nodesnap core library
//!
//! Drag-and-snap alignment engine: drag rectangular nodes with a pointer and
//! have them line up with nearby nodes or the page edges when released close
//! enough. Platform-agnostic; hosts feed pointer events in and mirror the
//! resulting positions.

pub mod config;
pub mod drag;
pub mod geometry;
pub mod input;
pub mod proximity;
pub mod registry;
pub mod snap;
pub mod viewport;

pub use config::{ConfigError, ConfigResult, SnapConfig};
pub use drag::{DragController, DragFeedback, DragSession, DragState};
pub use geometry::{Axis, AxisLines, distance, rect_of};
pub use input::{EventSource, PointerEvent, RecordedEvents};
pub use proximity::{Candidate, find_closest, find_closest_in};
pub use registry::{Node, NodeId, NodeRegistry};
pub use snap::{SnapLine, SnapResult, SnapTarget, snap_rect, snap_to_node, snap_to_page};
pub use viewport::Viewport;
