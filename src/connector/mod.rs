//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Process launching (tokio, plus a recording launcher for dry runs)
//! - Readiness probing (reqwest)
//! - The web control panel itself (axum)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
