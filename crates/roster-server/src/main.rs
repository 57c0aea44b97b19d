use std::path::PathBuf;
use std::process;

use clap::Parser;

use roster_adapter_file::DEFAULT_ROSTER_PATH;
use roster_server::ServerConfig;
use roster_server::logging::{LogConfig, init_logging};

#[derive(Parser)]
#[command(
    name = "roster-server",
    about = "Serve member lookups from a static JSON roster"
)]
struct Cli {
    /// Path to the roster JSON file
    #[arg(short, long, env = "ROSTER_DATA", default_value = DEFAULT_ROSTER_PATH)]
    data: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "ROSTER_PORT", default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Keep the roster in memory until the file changes
    #[arg(long)]
    cache: bool,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        level: cli.log_level,
        json: cli.json_logs,
    });

    if !cli.data.exists() {
        tracing::warn!(
            path = %cli.data.display(),
            "roster file does not exist yet; requests will fail until it is created"
        );
    }

    let config = ServerConfig {
        port: cli.port,
        host: cli.host,
        data_path: cli.data,
        cache: cli.cache,
    };

    if let Err(e) = roster_server::start_server(config).await {
        tracing::error!(error = %e, "server error");
        process::exit(1);
    }
}
