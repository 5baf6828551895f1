//! nodesnap application
//!
//! Host shell for the drag-and-snap engine: seeds the node layout, replays
//! recorded pointer traces and mirrors positions and cursor state.

mod host;
mod trace;

pub use host::{Cursor, DEFAULT_NODE_SIZE, Host, default_layout};
pub use trace::{Trace, TraceEvent};

use nodesnap_core::ConfigError;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Trace parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
