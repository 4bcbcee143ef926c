//! HTTP surface for the post board.
//!
//! # Responsibility
//! - Parse process configuration.
//! - Map REST routes onto `postboard_core` services and JSON bodies.

pub mod config;
pub mod http;

pub use config::Config;
pub use http::{build_router, serve, AppState};
