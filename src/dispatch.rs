// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command dispatcher.
//!
//! Turns one inbound text message into one reply. Slash commands always win
//! over an in-progress dialog; plain text is fed to the active dialog state
//! (onboarding step or food sub-dialog). Validation failures re-prompt
//! without mutating any state.

use chrono::Utc;

use crate::error::{CommandError, CommandResult};
use crate::models::{Account, Goals, Ledger};
use crate::onboarding::{self, OnboardingState, StepOutcome};
use crate::services::ledger::ProgressView;
use crate::services::{food, goals, ledger, DEFAULT_TEMPERATURE_C};
use crate::store::Dialog;
use crate::text::{capitalize, fmt_kcal};
use crate::AppState;

const WELCOME: &str = "Привет! Я бот для отслеживания воды, калорий и активности.\n\n\
    Доступные команды:\n\
    /set_profile - Настроить профиль\n\
    /log_water <мл> - Записать выпитую воду\n\
    /log_food <название> - Записать прием пищи\n\
    /log_workout <тип> <минуты> - Записать тренировку\n\
    /check_progress - Проверить прогресс\n\
    /help - Показать справку";

const HELP: &str = "Я помогаю следить за водным балансом, калориями и активностью.\n\n\
    Как пользоваться:\n\
    1. Настройте профиль командой /set_profile\n\
    2. Записывайте выпитую воду командой /log_water <мл>\n\
    3. Записывайте приемы пищи командой /log_food <название>\n\
    4. Записывайте тренировки командой /log_workout <тип> <минуты>\n\
    5. Проверяйте прогресс командой /check_progress\n";

const NOT_ONBOARDED: &str = "Сначала настройте профиль с помощью команды /set_profile";

const UNKNOWN: &str =
    "Я не понимаю это сообщение. Отправьте /help, чтобы посмотреть список команд.";

const WATER_USAGE: &str = "Укажите количество воды в мл. Пример: /log_water 250";

const WATER_INVALID: &str =
    "Пожалуйста, введите корректное положительное число. Пример: /log_water 250";

const FOOD_NAME_PROMPT: &str = "Что вы съели?";

const FOOD_WEIGHT_INVALID: &str =
    "Пожалуйста, введите корректное положительное число для веса:";

const WORKOUT_USAGE: &str = "Укажите тип тренировки и время. Пример: /log_workout бег 30";

const WORKOUT_INVALID: &str =
    "Пожалуйста, введите корректное положительное число для времени. Пример: /log_workout бег 30";

/// Handle one inbound message and produce the reply text.
pub async fn handle_message(app: &AppState, chat_id: i64, text: &str) -> String {
    let text = text.trim();

    let result = if let Some(command_line) = text.strip_prefix('/') {
        handle_command(app, chat_id, command_line).await
    } else {
        handle_dialog(app, chat_id, text).await
    };

    result.unwrap_or_else(|error| reply_for(&error))
}

/// Corrective reply for a failed command.
fn reply_for(error: &CommandError) -> String {
    match error {
        CommandError::Validation(text) => text.clone(),
        CommandError::NotOnboarded => NOT_ONBOARDED.to_string(),
    }
}

// ─── Commands ────────────────────────────────────────────────

async fn handle_command(app: &AppState, chat_id: i64, command_line: &str) -> CommandResult {
    let (command, args) = match command_line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (command_line, ""),
    };
    // Group chats address commands as "/log_water@botname"
    let command = match command.split_once('@') {
        Some((command, _)) => command,
        None => command,
    };

    match command {
        "start" => Ok(WELCOME.to_string()),
        "help" => Ok(HELP.to_string()),
        "set_profile" => Ok(begin_onboarding(app, chat_id)),
        "log_water" => cmd_log_water(app, chat_id, args),
        "log_food" => cmd_log_food(app, chat_id, args),
        "log_workout" => cmd_log_workout(app, chat_id, args),
        "check_progress" => cmd_check_progress(app, chat_id),
        _ => {
            tracing::debug!(chat_id, command, "Unknown command");
            Ok(UNKNOWN.to_string())
        }
    }
}

/// Start (or restart) the onboarding questionnaire.
///
/// Discards any existing account and in-progress dialog for the user.
fn begin_onboarding(app: &AppState, chat_id: i64) -> String {
    app.store.reset(chat_id);
    let state = OnboardingState::AwaitingWeight;
    let prompt = state.prompt();
    app.store.set_dialog(chat_id, Dialog::Onboarding(state));
    tracing::info!(chat_id, "Onboarding started");
    prompt.to_string()
}

fn cmd_log_water(app: &AppState, chat_id: i64, args: &str) -> CommandResult {
    require_onboarded(app, chat_id)?;

    if args.is_empty() {
        return Err(CommandError::Validation(WATER_USAGE.to_string()));
    }
    let amount: u32 = args
        .parse()
        .ok()
        .filter(|a| *a > 0)
        .ok_or_else(|| CommandError::Validation(WATER_INVALID.to_string()))?;

    let view = app
        .store
        .with_account(chat_id, |account| {
            ledger::log_water(&mut account.ledger, amount);
            ledger::progress(account)
        })
        .ok_or(CommandError::NotOnboarded)?;

    tracing::info!(chat_id, amount_ml = amount, "Water logged");

    let mut reply = format!(
        "Записано: {} мл воды\nВсего выпито: {} мл из {} мл\n",
        amount, view.water_logged_ml, view.water_goal_ml
    );
    if view.water_remaining_ml > 0 {
        reply.push_str(&format!("Осталось выпить: {} мл", view.water_remaining_ml));
    } else {
        reply.push_str("Вы выполнили норму воды на сегодня!");
    }
    Ok(reply)
}

fn cmd_log_food(app: &AppState, chat_id: i64, args: &str) -> CommandResult {
    require_onboarded(app, chat_id)?;

    if args.is_empty() {
        // two-step fallback: ask for the name first, then the weight
        app.store.set_dialog(chat_id, Dialog::AwaitingFoodName);
        return Ok(FOOD_NAME_PROMPT.to_string());
    }

    let food_name = args.to_string();
    let prompt = format!("{} - сколько грамм вы съели?", capitalize(&food_name));
    app.store
        .set_dialog(chat_id, Dialog::AwaitingFoodWeight { food_name });
    Ok(prompt)
}

fn cmd_log_workout(app: &AppState, chat_id: i64, args: &str) -> CommandResult {
    require_onboarded(app, chat_id)?;

    // last token is the duration, everything before it the workout type
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let Some((duration_token, type_tokens)) = tokens.split_last() else {
        return Err(CommandError::Validation(WORKOUT_USAGE.to_string()));
    };
    if type_tokens.is_empty() {
        return Err(CommandError::Validation(WORKOUT_USAGE.to_string()));
    }
    let workout_type = type_tokens.join(" ");
    let duration: u32 = duration_token
        .parse()
        .ok()
        .filter(|d| *d > 0)
        .ok_or_else(|| CommandError::Validation(WORKOUT_INVALID.to_string()))?;

    let outcome = app
        .store
        .with_account(chat_id, |account| {
            ledger::log_workout(&mut account.ledger, &workout_type, duration)
        })
        .ok_or(CommandError::NotOnboarded)?;

    tracing::info!(
        chat_id,
        workout = %workout_type,
        duration_min = duration,
        calories = outcome.calories_burned,
        "Workout logged"
    );

    let mut reply = format!(
        "{} {} минут - {} ккал",
        capitalize(&workout_type),
        duration,
        outcome.calories_burned
    );
    if outcome.water_needed_ml > 0 {
        reply.push_str(&format!(
            "\nРекомендуется выпить дополнительно: {} мл воды",
            outcome.water_needed_ml
        ));
    }
    Ok(reply)
}

fn cmd_check_progress(app: &AppState, chat_id: i64) -> CommandResult {
    let account = app
        .store
        .account(chat_id)
        .ok_or(CommandError::NotOnboarded)?;
    Ok(render_progress(&ledger::progress(&account)))
}

fn require_onboarded(app: &AppState, chat_id: i64) -> Result<(), CommandError> {
    if app.store.is_onboarded(chat_id) {
        Ok(())
    } else {
        Err(CommandError::NotOnboarded)
    }
}

// ─── Dialog states ───────────────────────────────────────────

async fn handle_dialog(app: &AppState, chat_id: i64, text: &str) -> CommandResult {
    match app.store.dialog(chat_id) {
        Dialog::Idle => Ok(UNKNOWN.to_string()),
        Dialog::Onboarding(state) => onboarding_step(app, chat_id, &state, text).await,
        Dialog::AwaitingFoodName => {
            if text.is_empty() {
                return Ok(FOOD_NAME_PROMPT.to_string());
            }
            let food_name = text.to_string();
            let prompt = format!("{} - сколько грамм вы съели?", food_name);
            app.store
                .set_dialog(chat_id, Dialog::AwaitingFoodWeight { food_name });
            Ok(prompt)
        }
        Dialog::AwaitingFoodWeight { food_name } => {
            log_food_weight(app, chat_id, &food_name, text).await
        }
    }
}

/// Apply one onboarding reply; on the final step derive the goals and
/// create the account.
async fn onboarding_step(
    app: &AppState,
    chat_id: i64,
    state: &OnboardingState,
    input: &str,
) -> CommandResult {
    match onboarding::advance(state, input)? {
        StepOutcome::Next(next) => {
            let prompt = next.prompt();
            app.store.set_dialog(chat_id, Dialog::Onboarding(next));
            Ok(prompt.to_string())
        }
        StepOutcome::Done(profile) => {
            let temperature = match app.weather.current_temperature(&profile.city).await {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        city = %profile.city,
                        "Temperature lookup failed, using default"
                    );
                    DEFAULT_TEMPERATURE_C
                }
            };

            let derived = Goals {
                water_ml: goals::water_goal_ml(&profile, temperature),
                calorie_kcal: goals::calorie_goal_kcal(&profile),
            };
            tracing::info!(
                chat_id,
                city = %profile.city,
                water_goal_ml = derived.water_ml,
                calorie_goal_kcal = derived.calorie_kcal,
                "Onboarding complete"
            );

            let account = Account {
                profile,
                goals: derived,
                ledger: Ledger::default(),
                created_at: Utc::now().to_rfc3339(),
            };
            app.store.complete_onboarding(chat_id, account);

            Ok(format!(
                "Профиль успешно настроен!\n\n\
                 Ваша цель по воде: {} мл\n\
                 Ваша цель по калориям: {} ккал\n\n\
                 Теперь вы можете начать отслеживание!",
                derived.water_ml, derived.calorie_kcal
            ))
        }
    }
}

/// Final step of the food dialog: resolve the food and credit the calories.
async fn log_food_weight(
    app: &AppState,
    chat_id: i64,
    food_name: &str,
    input: &str,
) -> CommandResult {
    let weight_g = onboarding::parse_decimal(input)
        .filter(|w| *w > 0.0)
        .ok_or_else(|| CommandError::Validation(FOOD_WEIGHT_INVALID.to_string()))?;

    let info = food::resolve_food(app.food.as_ref(), food_name).await;

    let calories = app
        .store
        .with_account(chat_id, |account| {
            ledger::log_food(&mut account.ledger, info.kcal_per_100g, weight_g)
        })
        .ok_or(CommandError::NotOnboarded)?;
    app.store.set_dialog(chat_id, Dialog::Idle);

    tracing::info!(
        chat_id,
        food = %info.name,
        weight_g,
        calories,
        "Food logged"
    );

    Ok(format!(
        "Записано: {} - {} ккал ({} г)",
        info.name,
        fmt_kcal(calories),
        weight_g
    ))
}

/// Render the status report. Pure read, no mutation.
fn render_progress(view: &ProgressView) -> String {
    let mut reply = String::from("Прогресс:\n\nВода:\n");
    reply.push_str(&format!(
        "- Выпито: {} мл из {} мл\n",
        view.water_logged_ml, view.water_goal_ml
    ));
    if view.water_remaining_ml > 0 {
        reply.push_str(&format!("- Осталось: {} мл\n", view.water_remaining_ml));
    } else {
        reply.push_str("- Норма выполнена!\n");
    }

    reply.push_str("\nКалории:\n");
    reply.push_str(&format!("- Потреблено: {} ккал\n", fmt_kcal(view.food_kcal)));
    reply.push_str(&format!("- Сожжено: {} ккал\n", view.burned_kcal));
    reply.push_str(&format!(
        "- Баланс: {} ккал из {} ккал\n",
        fmt_kcal(view.calorie_balance),
        view.calorie_goal_kcal
    ));
    if view.calories_remaining > 0.0 {
        reply.push_str(&format!(
            "- Осталось: {} ккал\n",
            fmt_kcal(view.calories_remaining)
        ));
    } else {
        reply.push_str("- Норма выполнена!\n");
    }

    reply
}
