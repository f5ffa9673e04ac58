use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite_migration::{Migrations, M};
use tracing::debug;

use crate::app::{FreshetError, Result};
use crate::domain::{FeedItem, FeedSource, Freshness};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.conn()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| FreshetError::Migration(e.to_string()))?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| FreshetError::Lock(e.to_string()))
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| s.parse::<DateTime<Utc>>().ok())
    }

    fn source_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FeedSource> {
        Ok(FeedSource {
            id: row.get(0)?,
            freshness: Freshness::from_code(row.get(1)?),
            last_entry_at: row
                .get::<_, String>(2)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
            name: row.get(3)?,
            url: row.get(4)?,
        })
    }

    fn item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FeedItem> {
        Ok(FeedItem {
            source_id: row.get(0)?,
            entry_at: row
                .get::<_, String>(1)
                .ok()
                .and_then(|s| Self::parse_datetime(&s))
                .unwrap_or_else(Utc::now),
            pub_date: row.get(2)?,
            title: row.get(3)?,
            link: row.get(4)?,
            description: row.get(5)?,
        })
    }

    /// Collapse the Unseen rows left by the declaration insert into the
    /// accepted registry. One transaction; each join is resolved as a
    /// select-candidates batch followed by the applying statements.
    fn merge_unseen(&self) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        // URL join: an accepted row redeclared under a new name adopts it.
        // The accepted row keeps its id, so its items stay attached.
        let renames: Vec<(i64, i64, String)> = {
            let mut stmt = tx.prepare(
                "SELECT dest.id, src.id, src.name
                 FROM feed_sources dest
                 JOIN feed_sources src ON dest.url = src.url
                 WHERE dest.type_code = ?1 AND src.type_code = ?2",
            )?;
            let rows = stmt.query_map(
                params![Freshness::Accepted.code(), Freshness::Unseen.code()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };
        for (dest_id, src_id, name) in renames {
            tx.execute(
                "UPDATE feed_sources SET name = ?1 WHERE id = ?2",
                params![name, dest_id],
            )?;
            // A stale accepted row may already hold the adopted name; the
            // current declaration binds that name to dest's url, so the
            // stale row loses.
            tx.execute(
                "DELETE FROM feed_sources WHERE type_code = ?1 AND name = ?2 AND id <> ?3",
                params![Freshness::Accepted.code(), name, dest_id],
            )?;
            tx.execute("DELETE FROM feed_sources WHERE id = ?1", params![src_id])?;
        }

        // Name join: the same name redeclared with a new location moves the
        // accepted row to that location.
        let moves: Vec<(i64, i64, String)> = {
            let mut stmt = tx.prepare(
                "SELECT dest.id, src.id, src.url
                 FROM feed_sources dest
                 JOIN feed_sources src ON dest.name = src.name
                 WHERE dest.type_code = ?1 AND src.type_code = ?2
                   AND dest.url <> src.url",
            )?;
            let rows = stmt.query_map(
                params![Freshness::Accepted.code(), Freshness::Unseen.code()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };
        for (dest_id, src_id, url) in moves {
            tx.execute(
                "UPDATE feed_sources SET url = ?1 WHERE id = ?2",
                params![url, dest_id],
            )?;
            tx.execute("DELETE FROM feed_sources WHERE id = ?1", params![src_id])?;
        }

        // Duplicate Unseen urls from a single declaration pass: the latest
        // declared row wins.
        tx.execute(
            "DELETE FROM feed_sources
             WHERE type_code = ?1
               AND id NOT IN (
                 SELECT MAX(id) FROM feed_sources WHERE type_code = ?1 GROUP BY url
               )",
            params![Freshness::Unseen.code()],
        )?;

        // Whatever is still Unseen is genuinely new; accept it.
        tx.execute(
            "UPDATE feed_sources SET type_code = ?1 WHERE type_code = ?2",
            params![Freshness::Accepted.code(), Freshness::Unseen.code()],
        )?;

        tx.commit()?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn reconcile(
        &self,
        declared: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, FeedSource>> {
        if declared.is_empty() {
            return Ok(BTreeMap::new());
        }

        let now = Utc::now();

        {
            let mut conn = self.conn()?;
            let tx = conn.transaction()?;
            for (name, url) in declared {
                tx.execute(
                    "INSERT INTO feed_sources (type_code, entry_date, name, url)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        Freshness::Unseen.code(),
                        now.to_rfc3339(),
                        name.trim(),
                        url.trim()
                    ],
                )?;
            }
            tx.commit()?;
        }

        self.merge_unseen()?;

        let mut sources = BTreeMap::new();
        for mut source in self.get_all_sources()? {
            if source.is_due(now) {
                source.freshness = Freshness::DueForRefresh;
            }
            sources.insert(source.name.clone(), source);
        }

        debug!(count = sources.len(), "reconciled source registry");
        Ok(sources)
    }

    fn get_source_by_name(&self, name: &str) -> Result<Option<FeedSource>> {
        let conn = self.conn()?;

        let result = conn
            .query_row(
                "SELECT id, type_code, entry_date, name, url
                 FROM feed_sources WHERE name = ?1",
                params![name.trim()],
                Self::source_from_row,
            )
            .optional()?;

        Ok(result)
    }

    fn get_all_sources(&self) -> Result<Vec<FeedSource>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, type_code, entry_date, name, url
             FROM feed_sources ORDER BY name",
        )?;

        let sources = stmt
            .query_map([], Self::source_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(sources)
    }

    fn stage(&self, name: &str, items: &[FeedItem]) -> Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let source_id: i64 = tx
            .query_row(
                "SELECT id FROM feed_sources WHERE name = ?1",
                params![name.trim()],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| FreshetError::SourceNotFound(name.to_string()))?;

        let entry_at = Utc::now();
        let mut count = 0;

        for item in items {
            count += tx.execute(
                "INSERT INTO feed_items_staging
                     (source_id, entry_date, pub_date, title, link, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    source_id,
                    entry_at.to_rfc3339(),
                    item.pub_date.trim(),
                    item.title.trim(),
                    item.link.trim(),
                    item.description.trim()
                ],
            )?;
        }

        // A fetch that yields nothing still restarts the refresh window.
        tx.execute(
            "UPDATE feed_sources SET entry_date = ?1 WHERE id = ?2",
            params![entry_at.to_rfc3339(), source_id],
        )?;

        tx.commit()?;
        Ok(count)
    }

    fn promote(&self) -> Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let promoted = tx.execute(
            "INSERT OR IGNORE INTO feed_items
                 (source_id, entry_date, pub_date, title, link, description)
             SELECT source_id, entry_date, pub_date, title, link, description
             FROM feed_items_staging AS staging
             WHERE NOT EXISTS (
                 SELECT 1 FROM feed_items AS durable
                 WHERE durable.source_id = staging.source_id
                   AND durable.link = staging.link
             )
             GROUP BY source_id, pub_date, title, link, description
             ORDER BY source_id, pub_date DESC, title",
            [],
        )?;

        tx.execute(
            "DELETE FROM feed_items_staging
             WHERE datetime(entry_date, '+8 hours') < datetime('now')",
            [],
        )?;
        tx.execute(
            "DELETE FROM feed_items
             WHERE datetime(entry_date, '+1 month') < datetime('now')",
            [],
        )?;

        tx.commit()?;

        debug!(promoted, "promoted staged items");
        Ok(promoted)
    }

    fn load_all(&self) -> Result<BTreeMap<String, Vec<FeedItem>>> {
        let conn = self.conn()?;

        let mut counts: HashMap<i64, usize> = HashMap::new();
        {
            let mut stmt =
                conn.prepare("SELECT source_id, COUNT(*) FROM feed_items GROUP BY source_id")?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)? as usize))
            })?;
            for row in rows {
                let (source_id, count) = row?;
                counts.insert(source_id, count);
            }
        }

        let mut stmt = conn.prepare(
            "SELECT s.name, i.source_id, i.entry_date, i.pub_date, i.title, i.link, i.description
             FROM feed_items i
             JOIN feed_sources s ON s.id = i.source_id
             ORDER BY s.name, i.pub_date, i.title",
        )?;

        let mut grouped: BTreeMap<String, Vec<FeedItem>> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            let name: String = row.get(0)?;
            let item = FeedItem {
                source_id: row.get(1)?,
                entry_at: row
                    .get::<_, String>(2)
                    .ok()
                    .and_then(|s| Self::parse_datetime(&s))
                    .unwrap_or_else(Utc::now),
                pub_date: row.get(3)?,
                title: row.get(4)?,
                link: row.get(5)?,
                description: row.get(6)?,
            };
            Ok((name, item))
        })?;

        for row in rows {
            let (name, item) = row?;
            let capacity = counts.get(&item.source_id).copied().unwrap_or(0);
            grouped
                .entry(name)
                .or_insert_with(|| Vec::with_capacity(capacity))
                .push(item);
        }

        Ok(grouped)
    }

    fn load_one(&self, source: &FeedSource) -> Result<Vec<FeedItem>> {
        let conn = self.conn()?;

        let mut stmt;
        let items = if source.id != 0 {
            stmt = conn.prepare(
                "SELECT source_id, entry_date, pub_date, title, link, description
                 FROM feed_items WHERE source_id = ?1
                 ORDER BY pub_date, title",
            )?;
            stmt.query_map(params![source.id], Self::item_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?
        } else {
            stmt = conn.prepare(
                "SELECT i.source_id, i.entry_date, i.pub_date, i.title, i.link, i.description
                 FROM feed_items i
                 JOIN feed_sources s ON s.id = i.source_id
                 WHERE s.name = ?1
                 ORDER BY i.pub_date, i.title",
            )?;
            stmt.query_map(params![source.name.trim()], Self::item_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declare(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect()
    }

    fn item(pub_date: &str, title: &str, link: &str) -> FeedItem {
        let mut item = FeedItem::new(0);
        item.pub_date = pub_date.into();
        item.title = title.into();
        item.link = link.into();
        item.description = format!("{} description", title);
        item
    }

    fn staging_count(store: &SqliteStore) -> i64 {
        let conn = store.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM feed_items_staging", [], |row| {
            row.get(0)
        })
        .unwrap()
    }

    fn durable_count(store: &SqliteStore) -> i64 {
        let conn = store.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM feed_items", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_reconcile_inserts_declared_sources() {
        let store = SqliteStore::in_memory().unwrap();
        let sources = store
            .reconcile(&declare(&[
                ("Example", "https://example.com/feed.xml"),
                ("Other", "https://other.example/rss"),
            ]))
            .unwrap();

        assert_eq!(sources.len(), 2);
        // Freshly inserted rows fall inside the never-fetched window.
        assert!(sources
            .values()
            .all(|s| s.freshness == Freshness::DueForRefresh));

        // Persisted state is Accepted; DueForRefresh never hits the disk.
        let persisted = store.get_all_sources().unwrap();
        assert!(persisted.iter().all(|s| s.freshness == Freshness::Accepted));
    }

    #[test]
    fn test_reconcile_leaves_mid_window_sources_accepted() {
        let store = SqliteStore::in_memory().unwrap();
        let declared = declare(&[("Example", "https://example.com/feed.xml")]);
        store.reconcile(&declared).unwrap();

        // A fetch 30 minutes ago is inside the refresh window.
        let recent = (Utc::now() - chrono::Duration::minutes(30)).to_rfc3339();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute("UPDATE feed_sources SET entry_date = ?1", params![recent])
                .unwrap();
        }

        let sources = store.reconcile(&declared).unwrap();
        assert_eq!(sources["Example"].freshness, Freshness::Accepted);
    }

    #[test]
    fn test_reconcile_empty_declaration_short_circuits() {
        let store = SqliteStore::in_memory().unwrap();
        let sources = store.reconcile(&BTreeMap::new()).unwrap();

        assert!(sources.is_empty());
        assert!(store.get_all_sources().unwrap().is_empty());
    }

    #[test]
    fn test_reconcile_identical_redeclaration_keeps_one_row() {
        let store = SqliteStore::in_memory().unwrap();
        let declared = declare(&[("Example", "https://example.com/feed.xml")]);

        let first = store.reconcile(&declared).unwrap();
        let id = first["Example"].id;

        let second = store.reconcile(&declared).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second["Example"].id, id);
        assert_eq!(store.get_all_sources().unwrap().len(), 1);
    }

    #[test]
    fn test_reconcile_rename_preserves_identity() {
        let store = SqliteStore::in_memory().unwrap();
        let first = store
            .reconcile(&declare(&[("Old Name", "https://example.com/feed.xml")]))
            .unwrap();
        let id = first["Old Name"].id;

        store
            .stage("Old Name", &[item("2026-08-01", "Post", "https://example.com/p1")])
            .unwrap();
        store.promote().unwrap();

        let second = store
            .reconcile(&declare(&[("New Name", "https://example.com/feed.xml")]))
            .unwrap();

        assert_eq!(second.len(), 1);
        let renamed = &second["New Name"];
        assert_eq!(renamed.id, id);
        assert_eq!(renamed.url, "https://example.com/feed.xml");

        let items = store.load_one(renamed).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Post");
    }

    #[test]
    fn test_reconcile_url_match_is_case_insensitive() {
        let store = SqliteStore::in_memory().unwrap();
        let first = store
            .reconcile(&declare(&[("Example", "https://example.com/Feed.xml")]))
            .unwrap();
        let id = first["Example"].id;

        let second = store
            .reconcile(&declare(&[("Renamed", "https://example.com/FEED.XML")]))
            .unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(second["Renamed"].id, id);
    }

    #[test]
    fn test_reconcile_duplicate_urls_collapse() {
        let store = SqliteStore::in_memory().unwrap();
        let sources = store
            .reconcile(&declare(&[
                ("Alias A", "https://example.com/feed.xml"),
                ("Alias B", "https://example.com/feed.xml"),
            ]))
            .unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(store.get_all_sources().unwrap().len(), 1);
    }

    #[test]
    fn test_reconcile_same_name_new_url_moves_row() {
        let store = SqliteStore::in_memory().unwrap();
        let first = store
            .reconcile(&declare(&[("Example", "https://example.com/old.xml")]))
            .unwrap();
        let id = first["Example"].id;

        let second = store
            .reconcile(&declare(&[("Example", "https://example.com/new.xml")]))
            .unwrap();

        assert_eq!(second.len(), 1);
        let moved = &second["Example"];
        assert_eq!(moved.id, id);
        assert_eq!(moved.url, "https://example.com/new.xml");
    }

    #[test]
    fn test_stage_unknown_source_writes_nothing() {
        let store = SqliteStore::in_memory().unwrap();
        let result = store.stage("Nobody", &[item("2026-08-01", "Post", "https://x/p")]);

        assert!(matches!(result, Err(FreshetError::SourceNotFound(_))));
        assert_eq!(staging_count(&store), 0);
    }

    #[test]
    fn test_stage_empty_batch_still_advances_entry_date() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        // Backdate the row past the refresh window, then stage nothing.
        let stale = (Utc::now() - chrono::Duration::hours(3)).to_rfc3339();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute("UPDATE feed_sources SET entry_date = ?1", params![stale])
                .unwrap();
        }

        let staged = store.stage("Example", &[]).unwrap();
        assert_eq!(staged, 0);

        let source = store.get_source_by_name("Example").unwrap().unwrap();
        let age = Utc::now().signed_duration_since(source.last_entry_at);
        assert!(age < chrono::Duration::minutes(1));
    }

    #[test]
    fn test_promote_is_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        let batch = [
            item("2026-08-01", "First", "https://example.com/p1"),
            item("2026-08-02", "Second", "https://example.com/p2"),
        ];
        store.stage("Example", &batch).unwrap();
        let first = store.promote().unwrap();
        assert_eq!(first, 2);

        store.stage("Example", &batch).unwrap();
        let second = store.promote().unwrap();
        assert_eq!(second, 0);
        assert_eq!(durable_count(&store), 2);
    }

    #[test]
    fn test_promote_collapses_identical_staged_rows() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        let duplicate = item("2026-08-01", "Post", "https://example.com/p1");
        store
            .stage("Example", &[duplicate.clone(), duplicate])
            .unwrap();

        assert_eq!(store.promote().unwrap(), 1);
        assert_eq!(durable_count(&store), 1);
    }

    #[test]
    fn test_promote_novelty_is_scoped_per_source() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[
                ("Alpha", "https://alpha.example/feed.xml"),
                ("Beta", "https://beta.example/feed.xml"),
            ]))
            .unwrap();

        let shared = item("2026-08-01", "Crosspost", "https://shared.example/post");
        store.stage("Alpha", &[shared.clone()]).unwrap();
        store.stage("Beta", &[shared]).unwrap();

        assert_eq!(store.promote().unwrap(), 2);
        assert_eq!(durable_count(&store), 2);
    }

    #[test]
    fn test_promote_purges_stale_staging_rows() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        store
            .stage("Example", &[item("2026-08-01", "Old", "https://example.com/old")])
            .unwrap();

        let stale = (Utc::now() - chrono::Duration::hours(9)).to_rfc3339();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "UPDATE feed_items_staging SET entry_date = ?1",
                params![stale],
            )
            .unwrap();
        }

        // The stale row is still promoted on this pass, then swept from
        // staging.
        assert_eq!(store.promote().unwrap(), 1);
        assert_eq!(staging_count(&store), 0);
        assert_eq!(durable_count(&store), 1);
    }

    #[test]
    fn test_promote_purges_expired_durable_rows() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        store
            .stage("Example", &[item("2026-06-01", "Ancient", "https://example.com/a")])
            .unwrap();
        store.promote().unwrap();

        let expired = (Utc::now() - chrono::Duration::days(60)).to_rfc3339();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute("UPDATE feed_items SET entry_date = ?1", params![expired])
                .unwrap();
            conn.execute("DELETE FROM feed_items_staging", []).unwrap();
        }

        // Nothing staged; the sweep alone removes the expired row.
        assert_eq!(store.promote().unwrap(), 0);

        let source = store.get_source_by_name("Example").unwrap().unwrap();
        assert!(store.load_one(&source).unwrap().is_empty());
    }

    #[test]
    fn test_load_all_groups_by_name_in_order() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[
                ("Beta", "https://beta.example/feed.xml"),
                ("Alpha", "https://alpha.example/feed.xml"),
            ]))
            .unwrap();

        store
            .stage(
                "Alpha",
                &[
                    item("2026-08-02", "Later", "https://alpha.example/p2"),
                    item("2026-08-01", "Earlier", "https://alpha.example/p1"),
                ],
            )
            .unwrap();
        store
            .stage("Beta", &[item("2026-08-01", "Solo", "https://beta.example/p1")])
            .unwrap();
        store.promote().unwrap();

        let grouped = store.load_all().unwrap();
        let names: Vec<&String> = grouped.keys().collect();
        assert_eq!(names, ["Alpha", "Beta"]);

        let alpha = &grouped["Alpha"];
        assert_eq!(alpha.len(), 2);
        assert_eq!(alpha[0].title, "Earlier");
        assert_eq!(alpha[1].title, "Later");
    }

    #[test]
    fn test_load_one_matches_unsaved_source_by_name() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();
        store
            .stage("Example", &[item("2026-08-01", "Post", "https://example.com/p1")])
            .unwrap();
        store.promote().unwrap();

        let unsaved = FeedSource::new("example".into(), "https://example.com/feed.xml".into());
        let items = store.load_one(&unsaved).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Post");
    }

    #[test]
    fn test_get_source_by_name_is_case_insensitive() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .reconcile(&declare(&[("Example", "https://example.com/feed.xml")]))
            .unwrap();

        let found = store.get_source_by_name("EXAMPLE").unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Example");
    }
}
