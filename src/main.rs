use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quickfeed::app::AppContext;
use quickfeed::cli::{commands, Cli, Commands};
use quickfeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(workers) = cli.workers {
        config.aggregator.workers = workers;
    }

    let ctx = AppContext::new(&config).context("Failed to set up the news client")?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Categories => {
            commands::list_categories(&ctx).await?;
        }
        Commands::News { category } => {
            commands::list_news(&ctx, category.as_deref()).await?;
        }
        Commands::Summary { link } => {
            commands::show_summary(&ctx, &link).await?;
        }
        Commands::Define { word } => {
            commands::define_word(&ctx, &word).await?;
        }
        Commands::Tui => {
            quickfeed::tui::run(Arc::new(ctx), Arc::new(config)).await?;
        }
    }

    Ok(())
}

fn init_tracing(log: Option<&Path>) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match log {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
