// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Intake-Tracker Bot Server
//!
//! Receives chat updates over a Telegram webhook, tracks each user's water,
//! food calories and workouts, and answers with formatted status replies.

use intake_tracker::{
    config::Config,
    services::{OpenFoodFactsClient, OpenWeatherClient},
    store::UserStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Intake-Tracker bot");

    if config.openweather_api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set, water goals will use the default temperature");
    }

    // External lookup clients
    let weather = Arc::new(OpenWeatherClient::new(
        config.openweather_api_key.clone(),
        config.openweather_url.clone(),
    ));
    let food = Arc::new(OpenFoodFactsClient::new(config.openfoodfacts_url.clone()));

    // Build shared state with an empty in-memory user store
    let state = Arc::new(AppState {
        config: config.clone(),
        store: UserStore::new(),
        weather,
        food,
    });

    // Build router
    let app = intake_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
