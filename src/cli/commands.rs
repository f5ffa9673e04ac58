use std::path::PathBuf;

use crate::app::{AppContext, FreshetError, Result};
use crate::domain::FeedItem;
use crate::pipeline;
use crate::sources;
use crate::store::{SqliteStore, Store};

pub async fn refresh(ctx: &AppContext, sources_path: Option<PathBuf>) -> Result<()> {
    let path = match sources_path {
        Some(path) => path,
        None => ctx.config.sources_path()?,
    };

    let declared = sources::load_source_list(&path)?;
    if declared.is_empty() {
        println!("No sources declared in {}", path.display());
        return Ok(());
    }

    println!("Refreshing {} sources...", declared.len());

    let results = pipeline::refresh(ctx, &declared).await?;
    let total: usize = results.values().map(Vec::len).sum();

    println!(
        "Refresh complete: {} sources, {} items cached",
        results.len(),
        total
    );
    Ok(())
}

pub fn show(ctx: &AppContext, source: Option<&str>) -> Result<()> {
    let store = require_store(ctx)?;

    match source {
        Some(name) => {
            let found = store
                .get_source_by_name(name)?
                .ok_or_else(|| FreshetError::SourceNotFound(name.to_string()))?;
            let items = store.load_one(&found)?;
            print_source(&found.name, &items);
        }
        None => {
            let grouped = store.load_all()?;
            if grouped.is_empty() {
                println!("No cached items");
                return Ok(());
            }
            for (name, items) in grouped {
                print_source(&name, &items);
            }
        }
    }

    Ok(())
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let store = require_store(ctx)?;
    let grouped = store.load_all()?;

    if grouped.is_empty() {
        println!("No cached items");
        return Ok(());
    }

    for (name, items) in grouped {
        println!("{} ({} items)", name, items.len());
    }

    Ok(())
}

fn require_store(ctx: &AppContext) -> Result<&SqliteStore> {
    ctx.store
        .as_deref()
        .ok_or_else(|| FreshetError::Config("cache unavailable".into()))
}

fn print_source(name: &str, items: &[FeedItem]) {
    println!("==== {} ====", name);
    for item in items {
        if item.pub_date.is_empty() {
            println!("{}\n  {}", item.display_title(), item.link);
        } else {
            println!("{} {}\n  {}", item.pub_date, item.display_title(), item.link);
        }
    }
}
