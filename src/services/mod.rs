// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod food;
pub mod goals;
pub mod ledger;
pub mod weather;
pub mod workouts;

pub use food::{FoodInfo, FoodLookupSource, OpenFoodFactsClient};
pub use weather::{OpenWeatherClient, TemperatureSource, DEFAULT_TEMPERATURE_C};
