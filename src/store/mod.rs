pub mod sqlite;

use std::collections::BTreeMap;

use crate::app::Result;
use crate::domain::{FeedItem, FeedSource};

pub use sqlite::SqliteStore;

pub trait Store {
    // Source registry
    fn reconcile(&self, declared: &BTreeMap<String, String>)
        -> Result<BTreeMap<String, FeedSource>>;
    fn get_source_by_name(&self, name: &str) -> Result<Option<FeedSource>>;
    fn get_all_sources(&self) -> Result<Vec<FeedSource>>;

    // Item ingestion
    fn stage(&self, name: &str, items: &[FeedItem]) -> Result<usize>;
    fn promote(&self) -> Result<usize>;

    // Retrieval
    fn load_all(&self) -> Result<BTreeMap<String, Vec<FeedItem>>>;
    fn load_one(&self, source: &FeedSource) -> Result<Vec<FeedItem>>;
}
