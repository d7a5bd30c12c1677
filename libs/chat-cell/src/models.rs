use serde::{Deserialize, Serialize};

/// Inter-party chat message. `patient_id` and `doctor_id` are soft
/// references; the timestamp is recorded as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub message: String,
    pub timestamp: String,
}
