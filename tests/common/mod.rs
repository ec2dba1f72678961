// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use intake_tracker::config::Config;
use intake_tracker::error::LookupError;
use intake_tracker::routes::create_router;
use intake_tracker::services::{FoodInfo, FoodLookupSource, TemperatureSource};
use intake_tracker::store::UserStore;
use intake_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Temperature source that always reports the same value.
pub struct FixedTemperature(pub f64);

#[async_trait]
impl TemperatureSource for FixedTemperature {
    async fn current_temperature(&self, _city: &str) -> Result<f64, LookupError> {
        Ok(self.0)
    }
}

/// Temperature source that always fails.
#[allow(dead_code)]
pub struct FailingTemperature;

#[async_trait]
impl TemperatureSource for FailingTemperature {
    async fn current_temperature(&self, _city: &str) -> Result<f64, LookupError> {
        Err(LookupError::Request("connection refused".to_string()))
    }
}

/// Food source with no matches; resolution falls through to the local table.
pub struct NoFood;

#[async_trait]
impl FoodLookupSource for NoFood {
    async fn lookup(&self, _name: &str) -> Result<Option<FoodInfo>, LookupError> {
        Ok(None)
    }
}

/// Food source that always returns the same product.
#[allow(dead_code)]
pub struct FixedFood(pub FoodInfo);

#[async_trait]
impl FoodLookupSource for FixedFood {
    async fn lookup(&self, _name: &str) -> Result<Option<FoodInfo>, LookupError> {
        Ok(Some(self.0.clone()))
    }
}

/// Food source that always fails.
#[allow(dead_code)]
pub struct FailingFood;

#[async_trait]
impl FoodLookupSource for FailingFood {
    async fn lookup(&self, _name: &str) -> Result<Option<FoodInfo>, LookupError> {
        Err(LookupError::Request("connection refused".to_string()))
    }
}

/// Create a test app with a 20 °C fake and no external food matches.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(FixedTemperature(20.0), NoFood)
}

/// Create a test app with the given fake lookup sources.
#[allow(dead_code)]
pub fn create_test_app_with(
    weather: impl TemperatureSource + 'static,
    food: impl FoodLookupSource + 'static,
) -> (axum::Router, Arc<AppState>) {
    create_app_inner(Config::default(), weather, food)
}

/// Create a test app that requires the given webhook secret.
#[allow(dead_code)]
pub fn create_secured_test_app(secret: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        webhook_secret: Some(secret.to_string()),
        ..Config::default()
    };
    create_app_inner(config, FixedTemperature(20.0), NoFood)
}

fn create_app_inner(
    config: Config,
    weather: impl TemperatureSource + 'static,
    food: impl FoodLookupSource + 'static,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        store: UserStore::new(),
        weather: Arc::new(weather),
        food: Arc::new(food),
    });
    (create_router(state.clone()), state)
}

/// POST a raw update payload to the webhook route.
#[allow(dead_code)]
pub async fn post_update(
    app: &axum::Router,
    payload: serde_json::Value,
    secret: Option<&str>,
) -> axum::response::Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook/telegram")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(secret) = secret {
        builder = builder.header("X-Telegram-Bot-Api-Secret-Token", secret);
    }
    let request = builder.body(Body::from(payload.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a text message from the given chat and return the bot's reply text.
#[allow(dead_code)]
pub async fn send_text(app: &axum::Router, chat_id: i64, text: &str) -> String {
    let payload = serde_json::json!({
        "update_id": 1,
        "message": {
            "message_id": 1,
            "chat": { "id": chat_id },
            "text": text,
        }
    });
    let response = post_update(app, payload, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let reply: serde_json::Value =
        serde_json::from_slice(&bytes).expect("webhook reply should be JSON");
    assert_eq!(reply["method"], "sendMessage");
    assert_eq!(reply["chat_id"], chat_id);
    reply["text"].as_str().expect("reply text").to_string()
}

/// Run the full onboarding questionnaire (70 kg / 170 cm / 30 y / 30 min)
/// and return the final goal summary.
#[allow(dead_code)]
pub async fn onboard_user(app: &axum::Router, chat_id: i64) -> String {
    send_text(app, chat_id, "/set_profile").await;
    send_text(app, chat_id, "70").await;
    send_text(app, chat_id, "170").await;
    send_text(app, chat_id, "30").await;
    send_text(app, chat_id, "30").await;
    send_text(app, chat_id, "Москва").await
}
