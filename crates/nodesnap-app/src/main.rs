//! Main application entry point.
//!
//! Usage: `nodesnap [trace.json]`. Without a path the built-in demo trace runs.

use nodesnap_app::{AppError, Host, Trace};
use std::process::ExitCode;

fn run() -> Result<(), AppError> {
    let trace = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading trace from {}", path);
            Trace::load(path)?
        }
        None => Trace::demo(),
    };

    let mut host = Host::for_trace(&trace)?;
    host.replay(&trace);

    for (index, node) in host.registry().nodes().iter().enumerate() {
        println!("node {}: ({}, {})", index, node.position.x, node.position.y);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting nodesnap");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
