// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Intake-Tracker: a chat bot that tracks water, calories and workouts.
//!
//! This crate provides the backend for a Telegram-style health assistant:
//! an onboarding questionnaire derives daily water and calorie targets,
//! and logging commands maintain a per-user in-memory ledger.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod routes;
pub mod services;
pub mod store;
pub mod text;

use std::sync::Arc;

use config::Config;
use services::{FoodLookupSource, TemperatureSource};
use store::UserStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: UserStore,
    pub weather: Arc<dyn TemperatureSource>,
    pub food: Arc<dyn FoodLookupSource>,
}
