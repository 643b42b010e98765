#![forbid(unsafe_code)]

//! `brewdesk` support desk console binary.
//!
//! Bootstraps configuration and tracing, seeds the in-memory ticket
//! board, spawns the board-change logger, and drives the interactive
//! console until the operator quits.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use brewdesk::config::GlobalConfig;
use brewdesk::console::{self, ConsoleContext};
use brewdesk::seed;
use brewdesk::store::TicketStore;
use brewdesk::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "brewdesk", about = "Support desk for nunc. coffee appliances", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Start with an empty board even if the config enables demo data.
    #[arg(long)]
    no_seed: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("brewdesk console bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let config = match args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    let config = Arc::new(config);
    info!("configuration loaded");

    // ── Build the ticket store ──────────────────────────
    let initial = if config.seed_demo_data && !args.no_seed {
        seed::demo_board()
    } else {
        Vec::new()
    };
    let store = Arc::new(TicketStore::new(initial));
    info!(tickets = store.len(), "ticket board ready");

    // ── Board-change logger ─────────────────────────────
    let mut changes = store.subscribe();
    let logger = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let count = changes.borrow_and_update().len();
            info!(tickets = count, "ticket board updated");
        }
    });

    // ── Console loop until quit or ctrl-c ───────────────
    let ctx = ConsoleContext::new(Arc::clone(&config), Arc::clone(&store));
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = console::run(stdin, stdout, &ctx) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received");
        }
    }

    logger.abort();
    info!("brewdesk shut down");
    Ok(())
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
