use thiserror::Error;

use shared_models::ServiceError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Store faults surface through the generic `Error` tag so that every
/// operation keeps the closed taxonomy as its only error channel.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Error(err.to_string())
    }
}
