use std::net::SocketAddr;

use clap::{Parser, builder::BoolishValueParser};
use solthar_core::RemoteEndpoint;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";

#[derive(Parser, Debug)]
#[command(name = "solthar-mcpd", version, about = "Solthar MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "ATHENA_BASE_URL")]
    athena_base_url: Option<String>,

    #[arg(long, env = "ATHENA_API_KEY")]
    athena_api_key: Option<String>,

    #[arg(long, env = "MOAD_URL")]
    moad_url: Option<String>,

    #[arg(long, env = "MOAD_API_KEY")]
    moad_api_key: Option<String>,

    #[arg(
        long = "stdio",
        env = "SOLTHAR_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "SOLTHAR_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "SOLTHAR_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
///
/// Endpoint settings are not required at startup: an unconfigured service
/// reports a configuration error per call while the other stays usable.
#[derive(Clone)]
pub struct SoltharConfig {
    pub athena: RemoteEndpoint,
    pub moad: RemoteEndpoint,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
}

impl SoltharConfig {
    pub fn from_args() -> Self {
        Self::from(CliArgs::parse())
    }
}

impl From<CliArgs> for SoltharConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            athena: RemoteEndpoint::new(args.athena_base_url, args.athena_api_key),
            moad: RemoteEndpoint::new(args.moad_url, args.moad_api_key),
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
        }
    }
}
