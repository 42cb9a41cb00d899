use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bitex_core::{
    config::{ExchangeSettings, Settings},
    exchange::{ConfiguredSource, Endpoint, ExchangeError, Interface, OfflineTransport, Validation},
    ExchangeName, Pair, PairFormatter,
};

#[derive(Parser)]
#[command(name = "bitex")]
#[command(about = "Unified REST interface for cryptocurrency exchanges")]
struct Cli {
    /// Settings file, instead of config/default + config/$RUN_MODE
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known exchanges and what is configured for them
    Exchanges,
    /// Validate pairs against an exchange's configured pair list
    Check {
        #[arg(short, long)]
        exchange: String,
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load settings")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Exchanges => list_exchanges(&settings)?,
        Commands::Check { exchange, pairs } => check_pairs(&settings, &exchange, &pairs).await?,
    }

    Ok(())
}

fn list_exchanges(settings: &Settings) -> anyhow::Result<()> {
    println!("{:<16} {:>6} {:>10}", "EXCHANGE", "PAIRS", "ENDPOINTS");
    for name in ExchangeName::ALL {
        let (pairs, endpoints) = match settings.exchange(name) {
            Some(exchange) => (
                exchange
                    .supported_pairs
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |p| p.len().to_string()),
                exchange.endpoint_table()?.len(),
            ),
            None => ("-".to_string(), 0),
        };
        println!(
            "{:<16} {:>6} {:>7}/{}",
            name,
            pairs,
            endpoints,
            Endpoint::ALL.len()
        );
    }
    Ok(())
}

async fn check_pairs(settings: &Settings, exchange: &str, pairs: &[String]) -> anyhow::Result<()> {
    let name: ExchangeName = exchange.parse()?;
    let exchange_settings = settings.exchange(name).cloned().unwrap_or_else(|| {
        warn!("No settings for {}, pairs cannot be checked", name);
        ExchangeSettings::default()
    });

    let source = ConfiguredSource::from_pairs(exchange_settings.supported_pairs);
    let interface = Interface::connect(name.as_str(), OfflineTransport, &source).await?;
    info!("Checking {} pairs against {}", pairs.len(), name);

    let mut rejected = 0;
    for raw in pairs {
        // Structured pairs are formatted, anything else is taken verbatim
        let pair: Box<dyn PairFormatter> = match raw.parse::<Pair>() {
            Ok(pair) => Box::new(pair),
            Err(_) => Box::new(raw.clone()),
        };

        let verdict = match interface.validate(&*pair) {
            Ok(Validation::Supported) => "supported",
            Ok(Validation::Unchecked) => "unchecked",
            Err(ExchangeError::UnsupportedPair { .. }) => {
                rejected += 1;
                "unsupported"
            }
            Err(e) => return Err(e.into()),
        };
        println!("{}\t{}\t{}", raw, pair.format_for(name.as_str()), verdict);
    }

    if rejected > 0 {
        bail!("{} of {} pairs are not supported by {}", rejected, pairs.len(), name);
    }
    Ok(())
}
