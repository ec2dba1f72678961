// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ledger updates and the progress view.
//!
//! Pure functions over an already-resolved event: argument parsing lives in
//! the dispatcher and food/weather resolution in the lookup services, so
//! everything here is deterministic arithmetic.

use crate::models::{Account, Ledger};
use crate::services::workouts;

/// Add logged water to the ledger.
pub fn log_water(ledger: &mut Ledger, amount_ml: u32) {
    ledger.water_ml += i64::from(amount_ml);
}

/// Add a food entry and return the calories credited.
///
/// `round(kcal_per_100g * weight / 100)` to one decimal, as displayed.
pub fn log_food(ledger: &mut Ledger, kcal_per_100g: u32, weight_g: f64) -> f64 {
    let calories =
        (f64::from(kcal_per_100g) * weight_g / 100.0 * 10.0).round() / 10.0;
    ledger.food_kcal += calories;
    calories
}

/// What a logged workout did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutOutcome {
    pub calories_burned: u32,
    /// Recommended extra intake; already debited from the water counter.
    pub water_needed_ml: u32,
}

/// Add a workout: credit burned calories and debit the hydration need.
///
/// The debit models water consumed by exertion against the same counter as
/// drunk water, so `water_ml` may go negative.
pub fn log_workout(ledger: &mut Ledger, workout_type: &str, duration_min: u32) -> WorkoutOutcome {
    let calories_burned = workouts::calories_burned(workout_type, duration_min);
    let water_needed_ml = workouts::water_needed_ml(workout_type, duration_min);

    ledger.burned_kcal += calories_burned;
    if water_needed_ml > 0 {
        ledger.water_ml -= i64::from(water_needed_ml);
    }

    WorkoutOutcome {
        calories_burned,
        water_needed_ml,
    }
}

/// Snapshot of progress against the daily goals.
///
/// Computed fresh on every status query; remaining values are clamped at
/// zero for display, the balance is not.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub water_logged_ml: i64,
    pub water_goal_ml: u32,
    pub water_remaining_ml: i64,
    pub food_kcal: f64,
    pub burned_kcal: u32,
    pub calorie_balance: f64,
    pub calorie_goal_kcal: u32,
    pub calories_remaining: f64,
}

/// Build the progress view for an account.
pub fn progress(account: &Account) -> ProgressView {
    let ledger = &account.ledger;
    let goals = &account.goals;

    let calorie_balance = ledger.calorie_balance();

    ProgressView {
        water_logged_ml: ledger.water_ml,
        water_goal_ml: goals.water_ml,
        water_remaining_ml: (i64::from(goals.water_ml) - ledger.water_ml).max(0),
        food_kcal: ledger.food_kcal,
        burned_kcal: ledger.burned_kcal,
        calorie_balance,
        calorie_goal_kcal: goals.calorie_kcal,
        calories_remaining: (f64::from(goals.calorie_kcal) - calorie_balance).max(0.0),
    }
}
