use uuid::Uuid;

/// Produces a fresh record identifier per creation call. UUID v4 gives 122
/// bits of randomness, so no collision-retry logic exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierGenerator;

impl IdentifierGenerator {
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
