use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use blogdesk::config::Config;
use blogdesk::logging;
use blogdesk::server::BlogServer;
use blogdesk::ui::runtime;

#[derive(Parser)]
#[command(name = "blogdesk", version, about = "Blog management dashboard and API server")]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the blog API server.
    Serve {
        /// Override the configured bind address (host:port).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run the terminal dashboard.
    Ui {
        /// Override the configured API base URL.
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Serve { bind } => {
            logging::init_server_tracing();

            let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            let mut server =
                BlogServer::from_config(&config).context("Failed to open blog store")?;
            server
                .try_bind(&bind_addr)
                .await
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
            server
                .run()
                .await
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
        Command::Ui { base_url } => {
            logging::init_ui_tracing();

            let mut config = config;
            if let Some(base_url) = base_url {
                config.api.base_url = base_url;
            }
            runtime::run(&config).await?;
        }
    }

    Ok(())
}
