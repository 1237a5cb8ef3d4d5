//! Feed CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse configuration**: flags with environment fallbacks (see
//!    [`config::CliConfig`]).
//! 2. **Wire observability**: `tracing-subscriber` with a pretty or JSON
//!    layer and an optional OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure**: a [`feed_http::ReqwestHttpClient`]
//!    injected into a [`feed::RemoteFeedLoader`].
//! 4. **Load once** and print a [`report::FeedReport`] to stdout.

mod config;
mod observability;
mod report;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use feed::RemoteFeedLoader;
use feed_http::ReqwestHttpClient;
use tracing::error;

use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    let telemetry = observability::init(config.log_format, config.otlp_endpoint.as_deref())?;

    let outcome = run(&config).await;
    if let Err(error) = &outcome {
        error!("feedctl failed: {error:#}");
    }

    telemetry.shutdown();
    outcome
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let client = ReqwestHttpClient::new(&config.http_client_config())
        .context("failed to construct HTTP transport")?;
    let loader = RemoteFeedLoader::new(config.url.clone(), Arc::new(client));

    let report = report::load_report(&loader, &config.url).await?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("failed to write report")?;
    writeln!(stdout).context("failed to write report")?;
    Ok(())
}
