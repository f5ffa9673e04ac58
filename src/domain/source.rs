use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Oldest a source's last successful fetch may be before it is refetched.
pub const REFRESH_WINDOW_MINS: i64 = 60;

/// Entries younger than this are treated as never fetched.
pub const FRESH_INSERT_SECS: i64 = 60;

/// Lifecycle state of a source row, persisted as the `type_code` column.
///
/// `DueForRefresh` only ever exists in memory; the store persists rows as
/// either `Accepted` or `Unseen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Freshness {
    Accepted,
    Unseen,
    DueForRefresh,
}

impl Freshness {
    pub fn code(self) -> i64 {
        match self {
            Freshness::Accepted => 0,
            Freshness::Unseen => 1,
            Freshness::DueForRefresh => 3,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Freshness::Unseen,
            3 => Freshness::DueForRefresh,
            _ => Freshness::Accepted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSource {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub freshness: Freshness,
    pub last_entry_at: DateTime<Utc>,
}

impl FeedSource {
    pub fn new(name: String, url: String) -> Self {
        Self {
            id: 0,
            name,
            url,
            freshness: Freshness::Unseen,
            last_entry_at: Utc::now(),
        }
    }

    /// Whether the refresh window has elapsed for this source.
    ///
    /// A source is due when its last fetch is more than an hour old, or
    /// less than a minute old. The second arm catches rows whose
    /// `entry_date` was stamped at insertion rather than by a fetch, so a
    /// freshly declared source is picked up on the same pass.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.last_entry_at);
        age > Duration::minutes(REFRESH_WINDOW_MINS) || age < Duration::seconds(FRESH_INSERT_SECS)
    }
}
