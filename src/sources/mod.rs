use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::app::Result;

/// Load the declared source list: one `name<TAB>url` pair per line.
///
/// Lines starting with `#` and lines without a tab are skipped. A missing
/// file is treated as an empty declaration.
pub fn load_source_list<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "source list not found, treating as empty");
        return Ok(BTreeMap::new());
    }

    let content = std::fs::read_to_string(path)?;
    let mut declared = BTreeMap::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        let Some((name, url)) = line.split_once('\t') else {
            continue;
        };
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            continue;
        }
        declared.insert(name.to_string(), url.to_string());
    }

    debug!(path = %path.display(), count = declared.len(), "loaded source list");
    Ok(declared)
}
