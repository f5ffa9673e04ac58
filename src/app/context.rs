use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    /// `None` when the cache could not be opened; the pipeline then runs in
    /// pass-through mode and serves fetched items from memory.
    pub store: Option<Arc<SqliteStore>>,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let store = match config
            .database_path()
            .map_err(Into::into)
            .and_then(|path| SqliteStore::new(path))
        {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                warn!(error = %e, "cache unavailable, running without persistence");
                None
            }
        };

        let timeout = Duration::from_secs(config.fetch.timeout_secs);
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_timeout(timeout));

        Self {
            store,
            fetcher,
            config,
        }
    }

    pub fn in_memory() -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());

        Ok(Self {
            store: Some(store),
            fetcher,
            config: Config::default(),
        })
    }
}
