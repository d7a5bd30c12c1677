use shared_models::{ServiceError, ServiceResult};

/// Presence check for a required string field. Whitespace-only values count
/// as missing.
pub fn require(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidPayload(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}
