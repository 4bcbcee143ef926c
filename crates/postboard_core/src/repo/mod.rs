//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage collaborator contracts consumed by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories report "no row affected" as `RepoError::NotFound`; turning
//!   that into a user-facing error is the service's job.

pub mod book_repo;
pub mod error;
pub mod post_repo;
