use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use offer_config::{ConfigLoader, OfferConfig};
use offer_relay::{HttpBidRelay, OfferRelayHandler};
use offer_storefront::GraphQlStorefront;

mod server;
mod session;
mod state;

use session::SessionManager;
use state::AppState;

#[derive(Parser)]
#[command(name = "offer-service")]
#[command(about = "Storefront offer relay service", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[arg(short, long, value_name = "FILE", default_value = "config/local.toml")]
	config: PathBuf,

	#[arg(long, env = "OFFER_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the offer relay service
	Start,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	match cli.command {
		Some(Commands::Start) | None => start_service(cli).await,
		Some(Commands::Validate) => validate_config(cli).await,
	}
}

async fn start_service(cli: Cli) -> Result<()> {
	info!("Starting offer relay service");
	info!("Loading configuration from: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration loaded successfully");
	info!("Store domain: {}", config.relay.store_domain);
	info!("HTTP port: {}", config.service.port);

	let state = build_state(&config);
	server::run(&config.service, state)
		.await
		.context("HTTP server failed")?;

	info!("Offer relay service stopped");
	Ok(())
}

async fn validate_config(cli: Cli) -> Result<()> {
	info!("Validating configuration file: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	info!("Configuration is valid");
	info!("Storefront API: {}", config.storefront.api_url);
	info!("Bid endpoint: {}", config.relay.bid_url());
	info!("Shop: {}", config.shop.storefront_id);

	Ok(())
}

fn build_state(config: &OfferConfig) -> AppState {
	let storefront = GraphQlStorefront::new(
		&config.storefront.api_url,
		&config.storefront.access_token,
		&config.storefront.country,
		&config.storefront.language,
	);
	let bid_relay = HttpBidRelay::new(config.relay.bid_url(), &config.relay.digest_cookie);
	let handler = OfferRelayHandler::new(
		Arc::new(storefront),
		Arc::new(bid_relay),
		config.shop.storefront_id.clone(),
	);

	AppState {
		handler: Arc::new(handler),
		sessions: Arc::new(SessionManager::new(&config.session)),
	}
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
