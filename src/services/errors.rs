use std::fmt;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Catalog entity kinds that can be attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Color,
    Size,
    Category,
}

impl Axis {
    /// Lower-case label used in duplicate and validation messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Color => "color",
            Axis::Size => "size",
            Axis::Category => "category",
        }
    }

    /// Capitalized label used in not-found messages.
    pub fn title(self) -> &'static str {
        match self {
            Axis::Color => "Color",
            Axis::Size => "Size",
            Axis::Category => "Category",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the catalog services.
///
/// Everything except `Repository`, `CreateFailed` and `UpdateFailed` is an
/// expected outcome of user input and carries a message safe to show to the
/// caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted data failed validation.
    #[error("validation failed: {0}")]
    Form(String),
    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The same reference was submitted twice for one axis.
    #[error("Duplicate {axis}: {id}")]
    Duplicate { axis: Axis, id: i32 },
    /// The request clashes with existing data.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Product creation failed for a reason other than invalid input.
    #[error("failed to create product")]
    CreateFailed,
    /// Product or variant update failed for a reason other than invalid input.
    #[error("failed to update {0}")]
    UpdateFailed(&'static str),
    /// Persistence failure bubbling up from a repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Build a not-found error naming the missing entity and id, e.g. `Color not found: 7`.
    pub fn not_found(entity: &str, id: i32) -> Self {
        ServiceError::NotFound(format!("{entity} not found: {id}"))
    }
}
