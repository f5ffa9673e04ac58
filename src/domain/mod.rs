pub mod item;
pub mod source;

pub use item::FeedItem;
pub use source::{FeedSource, Freshness};
