//! Post domain model.
//!
//! # Responsibility
//! - Define the blog post record exchanged between service, storage and
//!   the HTTP surface.
//!
//! # Invariants
//! - `id` is `None` until storage assigns it on first persistence.
//! - Once assigned, `id` never changes and is never reused.
//! - `content` is capped at [`MAX_CONTENT_CHARS`] by the storage schema.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a post.
pub type PostId = i64;

/// Upper bound on `content` length enforced by the `posts` table.
pub const MAX_CONTENT_CHARS: usize = 50_000;

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Serialized as `null` for posts that were never persisted.
    pub id: Option<PostId>,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Creates an unsaved post. Fields are taken as-is, empty text included.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Overwrites title and content, leaving `id` untouched.
    pub fn apply_edit(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}
