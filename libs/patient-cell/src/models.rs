use serde::{Deserialize, Serialize};

use shared_models::CallerIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    /// Identity of the creating caller. Immutable after creation.
    pub owner: CallerIdentity,
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: u32,
}

/// Mergeable fields only; `id` and `owner` cannot be overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
}
