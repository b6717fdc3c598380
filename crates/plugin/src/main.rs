//! wikisearch plugin entry point.
//!
//! Boots the plugin and serves it to the host launcher over MCP on stdio.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;
use wikisearch_core::AppConfig;
use wikisearch_plugin::{Plugin, WikiSearchServer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    let plugin = Plugin::new(&config)?;
    plugin.startup();

    tracing::info!("Starting wikisearch plugin on stdio transport");

    let handler = WikiSearchServer::new(Arc::new(plugin));
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
