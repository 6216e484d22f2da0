//! Bhujal - Groundwater Advisory Service
//!
//! Estimates groundwater depth for a coordinate and produces borewell drilling
//! advice over HTTP, or once from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Serve on the configured address (default 0.0.0.0:5002)
//! cargo run --release
//!
//! # Serve with an explicit config and model
//! ./bhujal --config bhujal.toml --model groundwater_model.json
//!
//! # One-shot prediction printed as JSON
//! ./bhujal predict --lat 26.91 --lon 75.79 --month 4
//! ```
//!
//! # Environment Variables
//!
//! - `BHUJAL_CONFIG`: Path to the TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bhujal::api::{create_app, ApiState};
use bhujal::config::ServiceConfig;
use bhujal::pipeline::AdvisoryPipeline;
use bhujal::regressor::Regressor;
use bhujal::types::PredictionRequest;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "bhujal")]
#[command(about = "Bhujal groundwater depth and borewell drilling advisor")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (overrides BHUJAL_CONFIG and ./bhujal.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the server address (default: "0.0.0.0:5002")
    #[arg(short, long, value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Override the linear model file
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run one prediction and print the result as pretty JSON
    Predict {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Calendar month to plan from (1-12, default: current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

// ============================================================================
// Startup
// ============================================================================

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs go to stderr so `predict` output stays clean JSON on stdout.
fn init_logging(json: bool) {
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the config, then apply CLI overrides and re-validate.
fn load_config(args: &CliArgs) -> Result<ServiceConfig> {
    let mut config = match &args.config {
        Some(path) => ServiceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServiceConfig::load(),
    };

    if let Some(addr) = &args.addr {
        config.server.addr.clone_from(addr);
    }
    if let Some(model) = &args.model {
        config.model.path.clone_from(model);
    }
    config.validate().context("Invalid configuration after CLI overrides")?;
    Ok(config)
}

/// Load the regressor once. Any failure leaves the service on the heuristic
/// fallback rather than refusing to start.
fn load_regressor(config: &ServiceConfig) -> Option<Arc<Regressor>> {
    match Regressor::load(&config.model.path) {
        Ok(regressor) if regressor.expected_features() != config.model.expected_features => {
            warn!(
                path = %config.model.path.display(),
                configured = config.model.expected_features,
                actual = regressor.expected_features(),
                "Model feature count does not match config, running without model"
            );
            None
        }
        Ok(regressor) => {
            info!(
                kind = regressor.kind(),
                name = regressor.name(),
                features = regressor.expected_features(),
                "Model ready"
            );
            Some(Arc::new(regressor))
        }
        Err(e) => {
            warn!(error = %e, "Model unavailable, predictions will use the heuristic fallback");
            None
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn run_predict(pipeline: &AdvisoryPipeline, lat: f64, lon: f64, month: Option<u32>) -> Result<()> {
    let today = Utc::now().date_naive();
    let today = match month {
        Some(m) => NaiveDate::from_ymd_opt(today.year(), m, 1)
            .with_context(|| format!("Invalid month {m}"))?,
        None => today,
    };

    let request = PredictionRequest {
        latitude: Some(lat),
        longitude: Some(lon),
        ..PredictionRequest::default()
    };
    let result = pipeline
        .predict(&request, today)
        .context("Invalid coordinate")?;

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}

async fn run_server(config: ServiceConfig, pipeline: AdvisoryPipeline) -> Result<()> {
    let addr = config.socket_addr().context("Invalid server address")?;
    let app = create_app(ApiState::new(pipeline, config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {addr}"))?;
    info!("🌐 Listening on http://{addr}");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("✓ Bhujal shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config decides the log format; config loading logs through a scoped
    // plain-text subscriber.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&args))?;

    init_logging(config.logging.json);

    let pipeline = AdvisoryPipeline::new(load_regressor(&config));

    if let Some(SubCommand::Predict { lat, lon, month }) = args.command {
        return run_predict(&pipeline, lat, lon, month);
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Bhujal - Groundwater Advisory Service");
    info!(
        "  Model: {}",
        if pipeline.model_loaded() { "loaded" } else { "heuristic fallback" }
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    run_server(config, pipeline).await
}
