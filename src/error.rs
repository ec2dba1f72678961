// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Domain error types.
//!
//! Every user-visible failure maps to a short corrective reply; lookup
//! failures are always recovered internally via documented defaults and
//! never reach the user as errors.

/// Failure of a logging or onboarding command.
///
/// The dispatcher turns these into reply text: `Validation` carries the full
/// corrective instruction (including a usage example), `NotOnboarded` maps
/// to the fixed "set up your profile first" message.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Validation(String),

    #[error("user has not completed onboarding")]
    NotOnboarded,
}

/// Failure of an external lookup (weather or food data).
///
/// Callers recover with a default value instead of propagating these.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Result type alias for command handlers.
pub type CommandResult = std::result::Result<String, CommandError>;
