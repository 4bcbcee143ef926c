//! Domain records for the post board.
//!
//! # Responsibility
//! - Define the entities persisted by repositories and returned by services.
//!
//! # Invariants
//! - Every persisted record carries a storage-assigned integer id.
//! - Deletion is a hard delete; there are no tombstones.

pub mod book;
pub mod post;
