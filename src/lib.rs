//! # Freshet
//!
//! A staleness-aware RSS acquisition and caching engine.
//!
//! ## Architecture
//!
//! Freshet follows a modular pipeline architecture:
//!
//! ```text
//! Sources → Reconciler → Fetcher → Parser → Staging → Cache → CLI
//! ```
//!
//! - [`sources`]: loads the declared `name<TAB>url` source list
//! - [`store`]: reconciles the source registry and merges fetched items
//!   through a staging table into the durable cache
//! - [`fetcher`]: retrieves feed documents over HTTP or from files
//! - [`parser`]: walks the XML tree and captures item fields
//!
//! Each refresh pass fetches only the sources whose refresh window has
//! elapsed; everything else is answered from the cache.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run one refresh pass over the declared sources
//! freshet refresh --sources feeds.txt
//!
//! # Print cached headlines for one source
//! freshet show "Example Feed"
//!
//! # List sources with cached item counts
//! freshet list
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`domain`]: Core domain models (FeedSource, FeedItem)
//! - [`fetcher`]: Document retrieval
//! - [`parser`]: XML item extraction
//! - [`pipeline`]: The refresh pass driver
//! - [`sources`]: Source list loading
//! - [`store`]: SQLite persistence

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config, the
/// optional cache store, and the fetcher.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `refresh [--sources <path>]` - Run one refresh pass
/// - `show [source]` - Print cached items
/// - `list` - List sources with item counts
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/freshet/config.toml`: source list path, database
/// path, and fetch timeout.
pub mod config;

/// Core domain models.
///
/// - [`FeedSource`](domain::FeedSource): a declared feed with its
///   freshness lifecycle
/// - [`FeedItem`](domain::FeedItem): one cached headline
pub mod domain;

/// Feed document retrieval.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over document locations
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based
///   implementation that also reads `file:` URLs and bare paths
pub mod fetcher;

/// XML item extraction.
///
/// Walks the element tree and captures `title`/`link`/`description`/
/// `pubdate` for elements directly inside an `item`.
pub mod parser;

/// The refresh pass driver.
///
/// [`pipeline::refresh`] runs load → reconcile → fetch → stage → promote →
/// retrieve, degrading to pass-through when the cache is unavailable.
pub mod pipeline;

/// Source list loading.
///
/// Parses the newline-delimited `name<TAB>url` declaration file.
pub mod sources;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining registry, staging, promotion,
///   and retrieval operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
