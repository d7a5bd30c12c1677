use serde::{Deserialize, Serialize};

use shared_models::CallerIdentity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    /// Identity of the creating caller. Immutable after creation.
    pub owner: CallerIdentity,
    pub name: String,
    pub department_id: String,
    pub image: String,
    /// Unset at creation; toggled through the availability update.
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub department_id: String,
    pub image: String,
}

/// Mergeable fields only. `id` and `owner` are deliberately absent: they
/// cannot be overwritten by an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub department_id: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
}
