//! Stockflow command line client
//!
//! Terminal front end for the inventory and production dashboard API.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sf_client::HttpApiClient;
use sf_core::config::ClientConfig;
use sf_core::traits::Id;
use sf_notifications::{NotificationService, ToastQueue};
use sf_services::Dashboard;

mod cmd;
mod render;
mod toast;

#[derive(Parser)]
#[command(name = "stockflow")]
#[command(version, about = "Inventory and production dashboard client")]
pub struct Cli {
    /// Base URL of the API. Overrides STOCKFLOW_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Retries for a rate-limited list fetch. Overrides STOCKFLOW_RETRIES.
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Delay before the first retry. Overrides STOCKFLOW_RETRY_DELAY_MS.
    #[arg(long, global = true)]
    pub retry_delay_ms: Option<u64>,

    /// Write logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stock items
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },
    /// Production runs
    #[command(alias = "production")]
    Productions {
        #[command(subcommand)]
        command: ProductionCommands,
    },
    /// Articles allocated to a production
    Allocations {
        #[command(subcommand)]
        command: AllocationCommands,
    },
    /// Workforce cost of a production
    Workforce {
        #[command(subcommand)]
        command: WorkforceCommands,
    },
}

#[derive(Subcommand)]
pub enum ArticleCommands {
    List,
    /// Id and name of every article
    Names,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        qty: String,
    },
    Update {
        id: Id,
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        qty: String,
    },
    Delete {
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum ProductionCommands {
    List,
    Add {
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        qty: String,
        #[arg(long)]
        title: String,
    },
    /// Allocations and workforce of a production with their totals
    Summary {
        production_id: Id,
    },
}

#[derive(Subcommand)]
pub enum AllocationCommands {
    List {
        production_id: Id,
    },
    Add {
        production_id: Id,
        #[arg(long, allow_hyphen_values = true)]
        article: String,
        #[arg(long, allow_hyphen_values = true)]
        qty: String,
        #[arg(long, allow_hyphen_values = true)]
        unit_price: String,
    },
    Update {
        production_id: Id,
        id: Id,
        #[arg(long, allow_hyphen_values = true)]
        article: String,
        #[arg(long, allow_hyphen_values = true)]
        qty: String,
        #[arg(long, allow_hyphen_values = true)]
        unit_price: String,
    },
    Delete {
        production_id: Id,
        id: Id,
    },
}

#[derive(Subcommand)]
pub enum WorkforceCommands {
    List {
        production_id: Id,
    },
    Add {
        production_id: Id,
        #[arg(long, allow_hyphen_values = true)]
        workers: String,
        #[arg(long, allow_hyphen_values = true)]
        price_per_head: String,
    },
    Update {
        production_id: Id,
        id: Id,
        #[arg(long, allow_hyphen_values = true)]
        workers: String,
        #[arg(long, allow_hyphen_values = true)]
        price_per_head: String,
    },
    Delete {
        production_id: Id,
        id: Id,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.json);

    let config = load_config(&cli)?;
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        retries = config.retry.retries,
        "starting stockflow"
    );

    let toasts = ToastQueue::new();
    let notifier = NotificationService::new(toasts.dispatcher(), &config.notifications);
    let client = HttpApiClient::new(&config).context("Failed to set up the API client")?;
    let dashboard = Dashboard::new(Arc::new(client), config.retry, notifier);

    let result = match cli.command {
        Commands::Articles { command } => cmd::cmd_articles(&dashboard, command).await,
        Commands::Productions { command } => cmd::cmd_productions(&dashboard, command).await,
        Commands::Allocations { command } => cmd::cmd_allocations(&dashboard, command).await,
        Commands::Workforce { command } => cmd::cmd_workforce(&dashboard, command).await,
    };

    toast::flush(&toasts);
    result
}

/// Initialize tracing/logging. Logs go to stderr; stdout carries the tables.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,sf_services=debug,sf_client=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Defaults, then STOCKFLOW_* variables, then command-line flags
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("Invalid configuration")?;

    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(retries) = cli.retries {
        config.retry.retries = retries;
    }
    if let Some(delay) = cli.retry_delay_ms {
        config.retry.initial_delay_ms = delay;
    }

    Ok(config)
}
