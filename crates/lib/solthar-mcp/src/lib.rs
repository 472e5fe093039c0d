//! MCP server implementation for solthar-mcp.
//!
//! This crate wires the remote service clients into rmcp tool handlers and
//! exposes the MCP-facing API surface for ingestion, query, and doc
//! generation.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use solthar_core::{AthenaClient, MoadClient, RemoteEndpoint};

const SERVER_INSTRUCTIONS: &str = r"Solthar-MCP bridges two remote services into MCP tools.

Tools:
- `athenaIngest`: upload a file into the Athena knowledge base. Provide exactly one of
  `file_path` (a readable file on this host) or `file_base64` (raw content), plus a
  `source_type` label and optional `title`, `description`, and `tags` (a comma-delimited
  string or a list of tag strings).
- `athenaQuery`: ask Athena a question with a text `prompt`; returns the textual answer.
- `moad`: generate documentation for a codebase. Provide `project_path` and `output_path`;
  `format` defaults to markdown.

Notes:
- Requires ATHENA_BASE_URL/ATHENA_API_KEY and MOAD_URL/MOAD_API_KEY to be configured on
  the server; calls against an unconfigured service fail with a configuration error.
- `health` returns `ok`.";

/// Remote service clients shared by every tool invocation.
#[derive(Clone)]
pub struct ServiceClients {
    pub athena: AthenaClient,
    pub moad: MoadClient,
}

impl ServiceClients {
    #[must_use]
    pub fn new(athena_endpoint: RemoteEndpoint, moad_endpoint: RemoteEndpoint) -> Self {
        Self {
            athena: AthenaClient::new(athena_endpoint),
            moad: MoadClient::new(moad_endpoint),
        }
    }
}

/// MCP server wrapper around the service clients and tool routers.
#[derive(Clone)]
pub struct SoltharMcp {
    tool_router: ToolRouter<Self>,
    clients: Arc<ServiceClients>,
}

impl SoltharMcp {
    /// Creates a new server using clients by value.
    #[must_use]
    pub fn new(clients: ServiceClients) -> Self {
        Self::with_clients(Arc::new(clients))
    }

    /// Creates a new server using a shared client handle.
    #[must_use]
    pub fn with_clients(clients: Arc<ServiceClients>) -> Self {
        let tool_router =
            Self::tool_router_core() + Self::tool_router_athena() + Self::tool_router_moad();
        Self {
            tool_router,
            clients,
        }
    }

    pub(crate) fn athena(&self) -> &AthenaClient {
        &self.clients.athena
    }

    pub(crate) fn moad(&self) -> &MoadClient {
        &self.clients.moad
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl SoltharMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for SoltharMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
