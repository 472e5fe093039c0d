//! Daemon entry point for the Solthar MCP server.
//!
//! Loads configuration from the environment, builds the remote service
//! clients, and serves the MCP protocol over stdio and/or streamable HTTP.

mod config;

use std::sync::Arc;

use solthar_mcp::ServiceClients;
use solthar_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{error, info};

use crate::config::SoltharConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr; stdout belongs to the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solthar_mcpd=info,solthar_mcp=info,solthar_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SoltharConfig::from_args();
    let clients = Arc::new(ServiceClients::new(
        config.athena.clone(),
        config.moad.clone(),
    ));

    info!(
        athena_configured = config.athena.is_configured(),
        moad_configured = config.moad.is_configured(),
        "starting solthar-mcpd"
    );

    if config.enable_stdio && config.mcp_serve {
        let http_clients = clients.clone();
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        tokio::spawn(async move {
            if let Err(err) = serve_streamable_http(http_clients, http_config).await {
                error!(error = %err, "streamable HTTP server exited");
            }
        });
        serve_stdio(clients).await?;
    } else if config.enable_stdio {
        serve_stdio(clients).await?;
    } else if config.mcp_serve {
        serve_streamable_http(clients, McpHttpServerConfig::new(config.mcp_http_addr)).await?;
    } else {
        info!("no transport enabled; exiting");
    }
    Ok(())
}
