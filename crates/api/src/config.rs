//! Server configuration (CLI flags with environment fallbacks).

use std::net::SocketAddr;

use clap::Parser;
use storefront_observability::LogFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-api")]
#[command(about = "Read-only product catalog HTTP API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "STOREFRONT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Log output format (json or pretty); filtering uses RUST_LOG
    #[arg(long, env = "STOREFRONT_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}
