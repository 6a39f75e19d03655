mod layout;
mod sample;
mod summary;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gateway::config::Timeouts;
use gateway::{
    GatewayConfig, GatewayError, HttpGateway, InMemoryGateway, PersistenceGateway, SaveReceipt, run_save, system_clock_ms,
};
use venue_canvas::doc::DocError;
use venue_canvas::engine::EngineCore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid layout: {0}")]
    Doc(#[from] DocError),
    #[error("save failed: {0}")]
    Gateway(#[from] GatewayError),
}

#[derive(Parser, Debug)]
#[command(name = "venue", about = "Venue floor-plan layouts: samples, checks and saves")]
struct Cli {
    #[arg(long, env = "VENUE_API_BASE_URL", default_value = gateway::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "VENUE_LAYOUT_PATH", default_value = gateway::config::DEFAULT_LAYOUT_PATH)]
    layout_path: String,

    #[arg(long, env = "VENUE_API_TOKEN")]
    api_token: Option<String>,

    #[arg(long, env = "VENUE_REQUEST_TIMEOUT_SECS", default_value_t = gateway::config::DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "VENUE_CONNECT_TIMEOUT_SECS", default_value_t = gateway::config::DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seeded two-plan layout as JSON.
    Sample {
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a layout file and summarise each floor plan.
    Check { file: PathBuf },
    /// Push a layout file to the backend.
    Save {
        file: PathBuf,
        /// Validate and encode, but do not contact the backend.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    fn gateway_config(&self) -> Result<GatewayConfig, CliError> {
        let lookup = |key: &str| match key {
            "VENUE_API_BASE_URL" => Some(self.base_url.clone()),
            "VENUE_LAYOUT_PATH" => Some(self.layout_path.clone()),
            "VENUE_API_TOKEN" => self.api_token.clone(),
            _ => None,
        };
        let mut config = GatewayConfig::from_lookup(lookup)?;
        config.timeouts = Timeouts { request_secs: self.request_timeout_secs, connect_secs: self.connect_timeout_secs };
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Sample { pretty } => run_sample(*pretty),
        Command::Check { file } => run_check(file),
        Command::Save { file, dry_run } => run_save_file(&cli, file, *dry_run).await,
    };
    if let Err(err) = &result {
        if let Some(hint) = retry_hint(err) {
            tracing::warn!(error = %err, "{hint}");
        }
    }
    result
}

/// Advice for failures that may clear up if the same command is run again.
fn retry_hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Gateway(GatewayError::SaveInFlight) => Some("another save is still running; try again shortly"),
        CliError::Gateway(gw) if gw.retryable() => Some("the backend may recover; run the save again"),
        _ => None,
    }
}

fn run_sample(pretty: bool) -> Result<(), CliError> {
    let store = sample::sample_store()?;
    let rendered = if pretty { serde_json::to_string_pretty(&store)? } else { serde_json::to_string(&store)? };
    println!("{rendered}");
    Ok(())
}

fn run_check(file: &Path) -> Result<(), CliError> {
    let store = layout::load_layout(file)?;
    for scene in summary::summarize(&store) {
        println!("{scene}");
    }
    Ok(())
}

async fn run_save_file(cli: &Cli, file: &Path, dry_run: bool) -> Result<(), CliError> {
    let store = layout::load_layout(file)?;
    let mut core = EngineCore::with_store(store);

    let receipt = if dry_run {
        save_with(&InMemoryGateway::new(), &mut core).await?
    } else {
        let config = cli.gateway_config()?;
        tracing::info!(endpoint = %config.endpoint(), "pushing layout");
        save_with(&HttpGateway::new(&config)?, &mut core).await?
    };

    eprintln!("{} ({} bytes, status {})", core.save_label(), receipt.bytes, receipt.status);
    Ok(())
}

async fn save_with<G: PersistenceGateway>(gw: &G, core: &mut EngineCore) -> Result<SaveReceipt, CliError> {
    Ok(run_save(gw, core, system_clock_ms).await?)
}
