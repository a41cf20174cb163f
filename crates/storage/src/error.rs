use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Business rule violations raised by the use cases in [`crate::services`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Max distance reached")]
    MaxDistance,

    #[error("Max number of check-ins reached")]
    MaxNumberOfCheckIns,

    #[error("The check-in can only be validated until 20 minutes after its creation")]
    LateCheckInValidation,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
