use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::app::{AppContext, Result};
use crate::domain::{FeedItem, Freshness};
use crate::parser;
use crate::store::Store;

/// Run one refresh pass: reconcile the declared sources, fetch and stage
/// the ones whose refresh window has elapsed, promote staged items, and
/// return the cached items grouped by source name.
///
/// Failures are contained per source; a pass never aborts because one feed
/// is unreachable. When the cache itself is unavailable the pass degrades
/// to fetching every declared source and serving the results from memory.
pub async fn refresh(
    ctx: &AppContext,
    declared: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Vec<FeedItem>>> {
    if declared.is_empty() {
        info!("no sources declared");
        return Ok(BTreeMap::new());
    }

    let reconciled = match &ctx.store {
        Some(store) => match store.reconcile(declared) {
            Ok(sources) => Some(sources),
            Err(e) => {
                warn!(error = %e, "reconcile failed, falling back to pass-through");
                None
            }
        },
        None => None,
    };

    let (Some(store), Some(sources)) = (&ctx.store, reconciled) else {
        return fetch_pass_through(ctx, declared).await;
    };

    for (name, source) in &sources {
        if source.freshness != Freshness::DueForRefresh {
            debug!(source = %name, "inside refresh window, serving cached items");
            continue;
        }

        let items = match fetch_and_parse(ctx, &source.url).await {
            Ok(items) => items,
            Err(e) => {
                warn!(source = %name, error = %e, "fetch failed, skipping");
                continue;
            }
        };

        match store.stage(name, &items) {
            Ok(count) => debug!(source = %name, count, "staged items"),
            Err(e) => warn!(source = %name, error = %e, "staging failed, skipping"),
        }
    }

    if let Err(e) = store.promote() {
        warn!(error = %e, "promotion failed, serving previously cached items");
    }

    store.load_all()
}

/// Degraded pass without a cache: fetch everything declared, serve the
/// parsed items directly. Nothing is persisted.
async fn fetch_pass_through(
    ctx: &AppContext,
    declared: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Vec<FeedItem>>> {
    let mut results = BTreeMap::new();

    for (name, url) in declared {
        match fetch_and_parse(ctx, url).await {
            Ok(items) => {
                results.insert(name.clone(), items);
            }
            Err(e) => {
                warn!(source = %name, error = %e, "fetch failed, skipping");
                results.insert(name.clone(), Vec::new());
            }
        }
    }

    Ok(results)
}

async fn fetch_and_parse(ctx: &AppContext, location: &str) -> Result<Vec<FeedItem>> {
    let body = ctx.fetcher.fetch(location).await?;
    parser::parse_items(&body)
}
