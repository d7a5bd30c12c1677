use serde::{Deserialize, Serialize};

/// Consultation request. `patient_id` and `department_id` are soft
/// references; their existence is never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    pub patient_id: String,
    pub problem: String,
    pub department_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    pub patient_id: String,
    pub problem: String,
    pub department_id: String,
}
