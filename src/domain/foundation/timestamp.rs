//! UTC instants for form bookkeeping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// When a form was created or last touched.
///
/// Serializes as an RFC 3339 string. Idle-session pruning compares these
/// against a cutoff built with [`Timestamp::minus_secs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    pub fn minus_secs(&self, secs: u64) -> Self {
        Self(self.0 - seconds(secs))
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + seconds(secs))
    }
}

// Duration::seconds panics above i64::MAX / 1000.
fn seconds(secs: u64) -> Duration {
    let max = (i64::MAX / 1_000) as u64;
    Duration::seconds(secs.min(max) as i64)
}
