use thiserror::Error;

/// Failure of a single catalog operation.
///
/// Every variant is recoverable by the caller; no operation that returns an
/// error has mutated stored state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// One or more field rules were violated. Every violated rule is listed.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint (user email, amenity name) was violated.
    #[error("{0}")]
    Duplicate(String),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation(vec![message.into()])
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CatalogError::NotFound(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        CatalogError::Duplicate(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
