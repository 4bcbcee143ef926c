//! JSON request and error bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /post` and `PUT /post/{id}`.
///
/// Missing fields are accepted and stored as empty text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WritePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `POST /book` and `PUT /book/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

/// Error body shared by every failing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
