use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use flightdesk_client::{Config, HttpFlightGateway};
use flightdesk_core::BookingFlowController;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "flightdesk", about = "Search and book flights from the terminal")]
struct Args {
    /// Flights service root, overrides `gateway.base_url`
    #[arg(long)]
    base_url: Option<String>,

    /// Extra configuration file layered over `config/`
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "flightdesk=info,flightdesk_cli=info,flightdesk_core=info,flightdesk_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(base_url) = args.base_url {
        config.gateway.base_url = base_url;
    }
    tracing::info!("Using flights service at {}", config.gateway.base_url);

    let gateway = HttpFlightGateway::new(&config.gateway).context("Failed to build HTTP client")?;
    let mut controller = BookingFlowController::new(Arc::new(gateway));

    flightdesk_cli::run(
        &mut controller,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
