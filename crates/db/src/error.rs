use dealership_core::error::CoreError;
use dealership_core::validation::ValidationErrors;

/// Error returned by store operations that validate before writing.
///
/// Domain failures (field violations, a missing parent make) are kept apart
/// from database failures so callers can report them differently.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Core(CoreError::InvalidFields(errors))
    }
}
