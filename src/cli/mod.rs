pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "freshet")]
#[command(about = "A staleness-aware RSS feed cache", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one refresh pass over the declared source list
    Refresh {
        /// Path to the source list (name<TAB>url per line)
        #[arg(short, long)]
        sources: Option<std::path::PathBuf>,
    },
    /// Print cached items for one source, or for all sources
    Show {
        /// Source name; omit to print every source
        source: Option<String>,
    },
    /// List sources with their cached item counts
    List,
}
