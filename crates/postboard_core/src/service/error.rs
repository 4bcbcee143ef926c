//! Domain error surfaced by use-case services.

use crate::repo::error::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed message carried by every not-found failure.
pub const NOT_FOUND_MESSAGE: &str = "id를 확인해주세요!!";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error returned by post/book services.
///
/// `NotFound` is the only condition the services interpret; every other
/// storage failure is passed through as `Storage`.
#[derive(Debug)]
pub enum ServiceError {
    NotFound,
    Storage(RepoError),
}

impl ServiceError {
    /// Returns whether this error means "no record with that id".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str(NOT_FOUND_MESSAGE),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Maps the repository "no row affected" signal onto the domain error.
pub(crate) fn translate_missing_row(err: RepoError) -> ServiceError {
    match err {
        RepoError::NotFound(_) => ServiceError::NotFound,
        other => ServiceError::Storage(other),
    }
}
