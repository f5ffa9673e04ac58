pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// Retrieves the raw bytes of a feed document from a location, which may be
/// an http(s) URL, a `file:` URL, or a bare filesystem path.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}
