//! Application configuration loaded from environment variables.
//!
//! Every variable is optional: the lookup API credentials degrade to the
//! documented fallback values, and the URLs default to the public endpoints.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// OpenWeather API key; `None` means every temperature lookup falls back
    /// to the default temperature
    pub openweather_api_key: Option<String>,
    /// Base URL of the OpenWeather API (overridable for tests)
    pub openweather_url: String,
    /// Base URL of the OpenFoodFacts API (overridable for tests)
    pub openfoodfacts_url: String,
    /// Shared secret expected in the `X-Telegram-Bot-Api-Secret-Token`
    /// header of webhook requests; `None` disables the check
    pub webhook_secret: Option<String>,
}

const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org";
const DEFAULT_OPENFOODFACTS_URL: &str = "https://world.openfoodfacts.org";

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            openweather_api_key: None,
            openweather_url: DEFAULT_OPENWEATHER_URL.to_string(),
            openfoodfacts_url: DEFAULT_OPENFOODFACTS_URL.to_string(),
            webhook_secret: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing variables fall back to defaults; there are no required
    /// settings, so loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            openweather_url: env::var("OPENWEATHER_URL")
                .unwrap_or_else(|_| DEFAULT_OPENWEATHER_URL.to_string()),
            openfoodfacts_url: env::var("OPENFOODFACTS_URL")
                .unwrap_or_else(|_| DEFAULT_OPENFOODFACTS_URL.to_string()),
            webhook_secret: env::var("TELEGRAM_WEBHOOK_SECRET")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}
