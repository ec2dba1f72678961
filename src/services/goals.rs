// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily goal calculation from an onboarded profile.
//!
//! Pure functions; the temperature input is looked up by the caller so the
//! formulas stay deterministic and directly testable.

use crate::models::Profile;

/// Temperatures above this earn the hot-weather water bonus.
const HOT_WEATHER_THRESHOLD_C: f64 = 25.0;

/// Base water need per kilogram of body weight (mL).
const WATER_ML_PER_KG: f64 = 30.0;

/// Extra water per started 30-minute activity block (mL).
const WATER_ML_PER_ACTIVITY_BLOCK: u32 = 500;

/// Hot-weather water bonus (mL).
const HOT_WEATHER_BONUS_ML: u32 = 750;

/// Extra calories per 30-minute activity block (kcal).
const KCAL_PER_ACTIVITY_BLOCK: u32 = 200;

/// Daily water target in mL.
///
/// `weight * 30 + floor(activity / 30) * 500`, plus 750 mL when the current
/// temperature in the user's city exceeds 25 °C. The fractional base from a
/// decimal weight is truncated.
pub fn water_goal_ml(profile: &Profile, temperature_c: f64) -> u32 {
    let base = (profile.weight_kg * WATER_ML_PER_KG) as u32;
    let activity_bonus =
        (profile.daily_activity_minutes / 30) * WATER_ML_PER_ACTIVITY_BLOCK;
    let weather_bonus = if temperature_c > HOT_WEATHER_THRESHOLD_C {
        HOT_WEATHER_BONUS_ML
    } else {
        0
    };

    base + activity_bonus + weather_bonus
}

/// Daily calorie target in kcal.
///
/// Mifflin-St Jeor basal rate with the fixed male offset (no sex field is
/// collected; documented limitation), scaled by a banded activity
/// multiplier, plus 200 kcal per started 30-minute activity block.
pub fn calorie_goal_kcal(profile: &Profile) -> u32 {
    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
        - 5.0 * f64::from(profile.age_years)
        + 5.0;

    let activity_calories =
        (profile.daily_activity_minutes / 30) * KCAL_PER_ACTIVITY_BLOCK;

    (bmr * activity_multiplier(profile.daily_activity_minutes)) as u32 + activity_calories
}

/// Banded activity multiplier over daily activity minutes.
fn activity_multiplier(minutes: u32) -> f64 {
    match minutes {
        0..=29 => 1.2,    // sedentary
        30..=59 => 1.375, // lightly active
        60..=89 => 1.55,  // moderately active
        90..=119 => 1.725, // very active
        _ => 1.9,         // extra active
    }
}
