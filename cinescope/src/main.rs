//! `cinescope`: search the OMDb catalogue from a terminal.

mod command;
mod presenter;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cinescope_config::{CliOverrides, ConfigLoader};
use cinescope_core::{MetadataClient, OmdbClient, SessionRuntime};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::presenter::TerminalPresenter;

const DEFAULT_LOG_FILTER: &str = "cinescope=info";

#[derive(Debug, Parser)]
#[command(
    name = "cinescope",
    version,
    about = "Search the OMDb movie catalogue from a terminal",
    after_help = command::HELP
)]
struct Cli {
    /// Search to run immediately on start
    term: Option<String>,

    /// Config file (TOML or JSON); overrides CINESCOPE_CONFIG_PATH
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OMDb API key; overrides OMDB_API_KEY and the config file
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Metadata service endpoint; overrides OMDB_BASE_URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// tracing filter directive; RUST_LOG is used when omitted
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let load = ConfigLoader::new(cli.overrides())
        .load()
        .context("failed to load configuration")?;
    if let Some(path) = &load.dotenv_path {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    tracing::debug!(source = ?load.config.source, "configuration resolved");

    let client = OmdbClient::from_config(&load.config)
        .context("failed to build the metadata client")?;
    tracing::info!(
        provider = client.name(),
        base_url = %client.base_url(),
        "metadata client ready"
    );

    let presenter = TerminalPresenter::new(std::io::stdout());
    let mut runtime = SessionRuntime::new(Arc::new(client), presenter);
    repl::run(&mut runtime, cli.term).await
}
