//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for an in-memory form session (quick form or wizard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSessionId(Uuid);

impl FormSessionId {
    /// Random v4 id for a newly opened form.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FormSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
