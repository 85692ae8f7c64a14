use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_common::Config;
use carousel_core::{Generation, Pipeline};
use carousel_gemini::GeminiClient;
use carousel_relay::RelayConfig;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "AI-assisted carousel slide generation and image relay")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a carousel from a topic prompt
    Generate {
        /// Topic to build the carousel around
        topic: String,
        /// API key for the generation endpoint (falls back to GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Override model (e.g. gemini-1.5-pro-latest)
        #[arg(long)]
        model: Option<String>,
        /// Write the generated deck to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Run the image relay service
    Serve {
        /// Listen address, host:port (falls back to CAROUSEL_RELAY_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::from_env();

    match cli.command {
        Commands::Generate {
            topic,
            api_key,
            model,
            out,
        } => generate(&config, topic, api_key, model, out).await,
        Commands::Serve { addr } => serve(&config, addr).await,
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn generate(
    config: &Config,
    topic: String,
    api_key: Option<String>,
    model: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let api_key = api_key
        .or_else(|| config.api_key.clone())
        .context("no API key: pass --api-key or set GEMINI_API_KEY")?;
    let model = model.unwrap_or_else(|| config.model.clone());

    let pipeline = Pipeline::new(GeminiClient::new(api_key, model));
    match pipeline.generate(&topic).await? {
        Generation::Slides(slides) => {
            let json = serde_json::to_string_pretty(&slides)?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, json).await?;
                    println!("Carousel saved to: {}", path.display());
                }
                None => println!("{json}"),
            }
            Ok(())
        }
        Generation::Rejected(rejection) => {
            anyhow::bail!("no carousel generated: {}", rejection.reason)
        }
    }
}

async fn serve(config: &Config, addr: Option<String>) -> Result<()> {
    let addr = addr.unwrap_or_else(|| config.relay_addr.clone());
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid listen address: {addr}"))?;

    carousel_relay::serve(addr, RelayConfig::default()).await?;
    Ok(())
}
