//! Core use-case services.
//!
//! # Responsibility
//! - Enforce the CRUD contract on top of repository collaborators.
//! - Keep the HTTP layer decoupled from storage details.
//!
//! # Invariants
//! - Services receive their repository at construction; there is no
//!   ambient registry.

pub mod book_service;
pub mod error;
pub mod post_service;

/// Acknowledgement returned by a successful delete.
pub const DELETE_ACK: &str = "ok";
