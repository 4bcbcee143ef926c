//! Book domain model.
//!
//! Shares the post lifecycle: storage assigns `id` on first save and the
//! id stays fixed across edits.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a book.
pub type BookId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Overwrites title and author, leaving `id` untouched.
    pub fn apply_edit(&mut self, title: impl Into<String>, author: impl Into<String>) {
        self.title = title.into();
        self.author = author.into();
    }
}
