use html_escape::decode_html_entities;
use roxmltree::Document;

use crate::app::{FreshetError, Result};
use crate::domain::FeedItem;

/// Walk a feed document and collect its `item` entries.
///
/// The walk is structural, not schema-aware: any element named `item`
/// (ASCII case-insensitive) opens a new entry, and `title` / `link` /
/// `description` / `pubdate` elements are captured only when their
/// immediate parent is an `item`. Everything else, including channel-level
/// metadata that reuses the same tag names, is ignored.
pub fn parse_items(body: &[u8]) -> Result<Vec<FeedItem>> {
    let text = std::str::from_utf8(body).map_err(|e| FreshetError::Parse(e.to_string()))?;
    let doc = Document::parse(text).map_err(|e| FreshetError::Parse(e.to_string()))?;

    let mut items: Vec<FeedItem> = Vec::new();

    for node in doc.descendants().filter(|n| n.is_element()) {
        let name = node.tag_name().name();

        if name.eq_ignore_ascii_case("item") {
            items.push(FeedItem::new(0));
            continue;
        }

        let parent_is_item = node
            .parent_element()
            .map(|p| p.tag_name().name().eq_ignore_ascii_case("item"))
            .unwrap_or(false);
        if !parent_is_item {
            continue;
        }

        let Some(item) = items.last_mut() else {
            continue;
        };

        let value = decode_html_entities(node.text().unwrap_or("").trim()).to_string();

        if name.eq_ignore_ascii_case("title") {
            item.title = value;
        } else if name.eq_ignore_ascii_case("link") {
            item.link = value;
        } else if name.eq_ignore_ascii_case("description") {
            item.description = value;
        } else if name.eq_ignore_ascii_case("pubdate") {
            item.pub_date = value;
        }
    }

    Ok(items)
}
