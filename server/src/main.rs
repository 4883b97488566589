mod config;
mod http;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use platform_provider::ProviderClient;
use products_directory::Page;
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "directory-server", version, about = "Employee directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the employee batch once and serve the directory page.
    Serve(ServeCommand),
    /// Fetch the employee batch and print it as JSON.
    Fetch {
        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: std::net::IpAddr,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _obs = init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
        Command::Fetch { pretty } => run_fetch(&app_config, pretty).await,
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let client = ProviderClient::new(config.provider_url.clone());
    info!(endpoint = client.endpoint(), "loading employee batch");
    let page = Page::from_fetch(client.fetch_employees().await);
    let state = AppState::new(page, config);
    http::serve(cmd.into(), state).await
}

async fn run_fetch(config: &AppConfig, pretty: bool) -> Result<()> {
    let client = ProviderClient::new(config.provider_url.clone());
    let employees = client
        .fetch_employees()
        .await
        .with_context(|| format!("failed to fetch employees from {}", client.endpoint()))?;
    let json = if pretty {
        serde_json::to_string_pretty(&employees)?
    } else {
        serde_json::to_string(&employees)?
    };
    println!("{json}");
    Ok(())
}
