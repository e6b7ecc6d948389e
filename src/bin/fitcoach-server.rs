// ABOUTME: Fitcoach HTTP server binary
// ABOUTME: Loads configuration, initializes logging and serves the consultation API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitcoach Server Binary
//!
//! Starts the consultation HTTP server on the configured address.

use anyhow::Result;
use clap::Parser;
use fitcoach_server::{
    config::{environment::ServerConfig, NutritionConfig},
    logging, server,
};
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "fitcoach-server")]
#[command(about = "Fitcoach - rule-based fitness and nutrition consultation service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    // Invalid NUTRITION_* overrides abort startup
    let nutrition = NutritionConfig::install(NutritionConfig::load()?)?;
    info!(
        activity.moderate = nutrition.activity_factors.moderate,
        calories.deficit = nutrition.calorie_adjustments.weight_loss_deficit_kcal,
        calories.surplus = nutrition.calorie_adjustments.muscle_gain_surplus_kcal,
        "Nutrition configuration validated"
    );

    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Log all available endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);
    info!("=== Available Endpoints ===");
    info!("Intake form:        GET  {base}/");
    info!("Form submission:    POST {base}/consultation");
    info!("Consultation API:   POST {base}/api/consultation");
    info!("Display blocks API: POST {base}/api/consultation/blocks");
    info!("Health:             GET  {base}/health");
    info!("Readiness:          GET  {base}/ready");
}
