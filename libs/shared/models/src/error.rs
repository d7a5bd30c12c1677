use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed result taxonomy shared by every entity service. Callers must match
/// exhaustively before touching a payload.
///
/// `PaymentFailed` and `PaymentCompleted` are reserved for the ledger
/// integration and are never produced by the record services.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Error: {0}")]
    Error(String),

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Payment completed: {0}")]
    PaymentCompleted(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
