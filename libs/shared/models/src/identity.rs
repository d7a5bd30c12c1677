use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque caller identity supplied by the hosting runtime, one per call.
///
/// The token is compared by normalized textual equality: surrounding
/// whitespace is stripped at construction and the remaining text is matched
/// verbatim. No structure is assumed beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    pub fn new(token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self(token.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerIdentity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for CallerIdentity {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}
