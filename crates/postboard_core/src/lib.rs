//! Core domain logic for the post board backend.
//! This crate owns the CRUD contract; HTTP glue lives in `postboard_server`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId};
pub use model::post::{Post, PostId, MAX_CONTENT_CHARS};
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::post_repo::{PostRepository, SqlitePostRepository};
pub use service::book_service::BookService;
pub use service::error::{ServiceError, ServiceResult, NOT_FOUND_MESSAGE};
pub use service::post_service::PostService;
pub use service::DELETE_ACK;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
