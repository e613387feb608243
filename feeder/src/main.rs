//! Release Feeder
//!
//! Fetches the latest tags of a fixed set of language runtimes from the
//! GitHub GraphQL API and writes one Atom (or RSS) feed per repository.
//! Uses hexagonal (ports & adapters) architecture: the extraction/build
//! core is pure, collaborators live behind port traits.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use adapters::{FileFeedSink, GithubClientImpl};
use app::FeedService;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first: DEBUG decides the default log level
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        repositories = config.repositories.len(),
        format = %config.feed_format,
        output_dir = %config.output_dir,
        "Starting release feeder..."
    );
    tracing::debug!(?config, "Loaded configuration");

    // Create adapters
    let github = Arc::new(
        GithubClientImpl::new(config.github_graphql_url.clone(), &config.github_token)
            .context("Failed to build GitHub client")?,
    );
    let sink = Arc::new(FileFeedSink::new(&config.output_dir, config.feed_format));

    let service = FeedService::new(github, sink, config.max_items);
    let report = service.run(&config.repositories).await;

    let failed = report.failed_count();
    if failed > 0 {
        bail!(
            "{} of {} feeds could not be produced",
            failed,
            report.outcomes.len()
        );
    }

    tracing::info!(feeds = report.outcomes.len(), "All feeds written");
    Ok(())
}
