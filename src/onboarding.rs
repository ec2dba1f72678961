// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding questionnaire state machine.
//!
//! A strictly linear sequence of five prompts. Each state carries the fields
//! already collected, so a transition can never observe a half-written
//! profile. Invalid input re-prompts without advancing; the city step
//! accepts any non-empty text and completes the profile.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CommandError;
use crate::models::Profile;

/// Non-negative decimal: integer or one fractional part.
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

/// Non-negative integer.
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Current questionnaire step, carrying everything collected so far.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingState {
    AwaitingWeight,
    AwaitingHeight {
        weight_kg: f64,
    },
    AwaitingAge {
        weight_kg: f64,
        height_cm: f64,
    },
    AwaitingActivity {
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
    },
    AwaitingCity {
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        daily_activity_minutes: u32,
    },
}

impl OnboardingState {
    /// The question shown to the user when entering this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::AwaitingWeight => "Введите ваш вес (в кг):",
            Self::AwaitingHeight { .. } => "Введите ваш рост (в см):",
            Self::AwaitingAge { .. } => "Введите ваш возраст:",
            Self::AwaitingActivity { .. } => "Сколько минут активности у вас в день?",
            Self::AwaitingCity { .. } => "В каком городе вы находитесь?",
        }
    }

    /// The re-prompt shown when input for this state fails validation.
    fn retry_prompt(&self) -> &'static str {
        match self {
            Self::AwaitingWeight => "Пожалуйста, введите корректное число для веса:",
            Self::AwaitingHeight { .. } => "Пожалуйста, введите корректное число для роста:",
            Self::AwaitingAge { .. } => {
                "Пожалуйста, введите корректное целое число для возраста:"
            }
            Self::AwaitingActivity { .. } => {
                "Пожалуйста, введите корректное целое число для активности:"
            }
            Self::AwaitingCity { .. } => "Пожалуйста, укажите город:",
        }
    }
}

/// Result of feeding one validated reply to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Move to the next question.
    Next(OnboardingState),
    /// Questionnaire finished; the profile is complete.
    Done(Profile),
}

/// Apply one user reply to the current state.
///
/// On invalid input returns `CommandError::Validation` with the re-prompt
/// text; the caller keeps the state unchanged.
pub fn advance(state: &OnboardingState, input: &str) -> Result<StepOutcome, CommandError> {
    let input = input.trim();

    let outcome = match state.clone() {
        OnboardingState::AwaitingWeight => {
            let weight_kg = parse_decimal(input)
                .ok_or_else(|| CommandError::Validation(state.retry_prompt().to_string()))?;
            StepOutcome::Next(OnboardingState::AwaitingHeight { weight_kg })
        }
        OnboardingState::AwaitingHeight { weight_kg } => {
            let height_cm = parse_decimal(input)
                .ok_or_else(|| CommandError::Validation(state.retry_prompt().to_string()))?;
            StepOutcome::Next(OnboardingState::AwaitingAge {
                weight_kg,
                height_cm,
            })
        }
        OnboardingState::AwaitingAge {
            weight_kg,
            height_cm,
        } => {
            let age_years = parse_integer(input)
                .ok_or_else(|| CommandError::Validation(state.retry_prompt().to_string()))?;
            StepOutcome::Next(OnboardingState::AwaitingActivity {
                weight_kg,
                height_cm,
                age_years,
            })
        }
        OnboardingState::AwaitingActivity {
            weight_kg,
            height_cm,
            age_years,
        } => {
            let daily_activity_minutes = parse_integer(input)
                .ok_or_else(|| CommandError::Validation(state.retry_prompt().to_string()))?;
            StepOutcome::Next(OnboardingState::AwaitingCity {
                weight_kg,
                height_cm,
                age_years,
                daily_activity_minutes,
            })
        }
        OnboardingState::AwaitingCity {
            weight_kg,
            height_cm,
            age_years,
            daily_activity_minutes,
        } => {
            if input.is_empty() {
                return Err(CommandError::Validation(state.retry_prompt().to_string()));
            }
            StepOutcome::Done(Profile {
                weight_kg,
                height_cm,
                age_years,
                daily_activity_minutes,
                city: input.to_string(),
            })
        }
    };

    Ok(outcome)
}

/// Parse a non-negative decimal (integer or one fractional part).
///
/// Also used by the food sub-dialog, which accepts the same format.
pub fn parse_decimal(input: &str) -> Option<f64> {
    if !DECIMAL_RE.is_match(input) {
        return None;
    }
    input.parse().ok()
}

/// Parse a non-negative integer.
fn parse_integer(input: &str) -> Option<u32> {
    if !INTEGER_RE.is_match(input) {
        return None;
    }
    input.parse().ok()
}
