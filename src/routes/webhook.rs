// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook route for inbound Telegram updates.
//!
//! The transport is a black box: Telegram POSTs an update envelope here and
//! the reply rides back in the HTTP response as a `sendMessage` payload, so
//! no outbound Bot API call is needed. Anything that is not a text message
//! is acknowledged with 200 OK and ignored (Telegram retries non-2xx).

use crate::dispatch;
use crate::AppState;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Header Telegram echoes back when the webhook was registered with a secret.
const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/webhook/telegram", post(handle_update))
}

/// Telegram update envelope (only the fields we consume).
#[derive(Deserialize, Debug)]
struct Update {
    update_id: i64,
    message: Option<IncomingMessage>,
}

#[derive(Deserialize, Debug)]
struct IncomingMessage {
    chat: Chat,
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Chat {
    id: i64,
}

/// Reply delivered in the webhook response body.
#[derive(Serialize)]
struct WebhookReply {
    method: &'static str,
    chat_id: i64,
    text: String,
}

/// Handle an inbound update (POST).
async fn handle_update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    // Shared-secret check, when configured
    if let Some(expected) = &state.config.webhook_secret {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            tracing::warn!("Webhook secret token mismatch");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    let update: Update = match serde_json::from_value(payload) {
        Ok(u) => u,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse update");
            return StatusCode::OK.into_response(); // still 200 to avoid retries
        }
    };

    let Some(message) = update.message else {
        tracing::debug!(update_id = update.update_id, "Ignoring non-message update");
        return StatusCode::OK.into_response();
    };
    let Some(text) = message.text else {
        tracing::debug!(
            update_id = update.update_id,
            chat_id = message.chat.id,
            "Ignoring non-text message"
        );
        return StatusCode::OK.into_response();
    };

    let reply = dispatch::handle_message(&state, message.chat.id, &text).await;

    Json(WebhookReply {
        method: "sendMessage",
        chat_id: message.chat.id,
        text: reply,
    })
    .into_response()
}
