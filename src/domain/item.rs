use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cached headline. `link` is the de-duplication key within a source;
/// `pub_date` is kept as the provider's literal text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub source_id: i64,
    pub pub_date: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub entry_at: DateTime<Utc>,
}

impl FeedItem {
    pub fn new(source_id: i64) -> Self {
        Self {
            source_id,
            pub_date: String::new(),
            title: String::new(),
            link: String::new(),
            description: String::new(),
            entry_at: Utc::now(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.link
        } else {
            &self.title
        }
    }
}
