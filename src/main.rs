use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use freshet::app::AppContext;
use freshet::cli::{commands, Cli, Commands};
use freshet::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config);

    match cli.command {
        Commands::Refresh { sources } => {
            commands::refresh(&ctx, sources).await?;
        }
        Commands::Show { source } => {
            commands::show(&ctx, source.as_deref())?;
        }
        Commands::List => {
            commands::list(&ctx)?;
        }
    }

    Ok(())
}
