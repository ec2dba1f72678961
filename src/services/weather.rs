// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current temperature lookup by city.
//!
//! The production source is the OpenWeather current-weather API. Every
//! failure mode (missing key, network error, bad payload) surfaces as a
//! `LookupError`; callers convert it to `DEFAULT_TEMPERATURE_C` so a broken
//! lookup never fails the command that needed it.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::LookupError;

/// Neutral temperature assumed when the lookup is unavailable.
///
/// Below the hot-weather threshold, so the fallback contributes no bonus.
pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// Bounded timeout for the weather request.
const WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the current temperature for a city.
#[async_trait]
pub trait TemperatureSource: Send + Sync {
    /// Current temperature in °C.
    async fn current_temperature(&self, city: &str) -> Result<f64, LookupError>;
}

/// OpenWeather API client.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a client. Without an API key every lookup fails fast and the
    /// caller falls back to the default temperature.
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl TemperatureSource for OpenWeatherClient {
    async fn current_temperature(&self, city: &str) -> Result<f64, LookupError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LookupError::MissingCredentials("OPENWEATHER_API_KEY"))?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .timeout(WEATHER_TIMEOUT)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Request(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: WeatherResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Payload(e.to_string()))?;

        Ok(body.main.temp)
    }
}

#[derive(Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
}

#[derive(Deserialize)]
struct WeatherMain {
    temp: f64,
}
