use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub remaining: u64,
    pub reset: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct Member {
    pub login: String,
}

/// A public event, reduced to the one field the report needs.
#[derive(Clone, Debug, Deserialize)]
pub struct PublicEvent {
    pub created_at: DateTime<FixedOffset>,
}
