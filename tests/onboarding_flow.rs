// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end onboarding conversation tests.

mod common;

use common::{
    create_test_app, create_test_app_with, onboard_user, send_text, FailingTemperature,
    FixedTemperature, NoFood,
};

#[tokio::test]
async fn test_full_onboarding_reports_goals() {
    let (app, _state) = create_test_app();

    let reply = send_text(&app, 1, "/set_profile").await;
    assert_eq!(reply, "Введите ваш вес (в кг):");

    let reply = send_text(&app, 1, "70").await;
    assert_eq!(reply, "Введите ваш рост (в см):");

    let reply = send_text(&app, 1, "170").await;
    assert_eq!(reply, "Введите ваш возраст:");

    let reply = send_text(&app, 1, "30").await;
    assert_eq!(reply, "Сколько минут активности у вас в день?");

    let reply = send_text(&app, 1, "30").await;
    assert_eq!(reply, "В каком городе вы находитесь?");

    let reply = send_text(&app, 1, "Москва").await;
    // 70*30 + 500 at 20 °C; bmr 1617.5 * 1.375 -> 2224 + 200
    assert!(reply.contains("Ваша цель по воде: 2600 мл"), "{reply}");
    assert!(reply.contains("Ваша цель по калориям: 2424 ккал"), "{reply}");
}

#[tokio::test]
async fn test_hot_city_adds_water_bonus() {
    let (app, _state) = create_test_app_with(FixedTemperature(30.0), NoFood);

    let reply = onboard_user(&app, 1).await;
    assert!(reply.contains("Ваша цель по воде: 3350 мл"), "{reply}");
}

#[tokio::test]
async fn test_temperature_failure_falls_back_to_default() {
    let (app, _state) = create_test_app_with(FailingTemperature, NoFood);

    let reply = onboard_user(&app, 1).await;
    // 20 °C default contributes no hot-weather bonus
    assert!(reply.contains("Ваша цель по воде: 2600 мл"), "{reply}");
}

#[tokio::test]
async fn test_invalid_input_reprompts_without_advancing() {
    let (app, _state) = create_test_app();

    send_text(&app, 1, "/set_profile").await;

    let reply = send_text(&app, 1, "семьдесят").await;
    assert_eq!(reply, "Пожалуйста, введите корректное число для веса:");

    // same field still accepts valid input and advances exactly one state
    let reply = send_text(&app, 1, "70").await;
    assert_eq!(reply, "Введите ваш рост (в см):");

    send_text(&app, 1, "170").await;

    let reply = send_text(&app, 1, "30.5").await;
    assert_eq!(reply, "Пожалуйста, введите корректное целое число для возраста:");

    let reply = send_text(&app, 1, "30").await;
    assert_eq!(reply, "Сколько минут активности у вас в день?");
}

#[tokio::test]
async fn test_decimal_weight_and_height_accepted() {
    let (app, _state) = create_test_app();

    send_text(&app, 1, "/set_profile").await;
    send_text(&app, 1, "70.5").await;
    send_text(&app, 1, "170.5").await;
    send_text(&app, 1, "30").await;
    send_text(&app, 1, "0").await;
    let reply = send_text(&app, 1, "Сочи").await;

    // 70.5*30 = 2115, no activity blocks, 20 °C
    assert!(reply.contains("Ваша цель по воде: 2115 мл"), "{reply}");
}

#[tokio::test]
async fn test_set_profile_discards_previous_record() {
    let (app, _state) = create_test_app();

    onboard_user(&app, 1).await;
    send_text(&app, 1, "/log_water 500").await;

    // restarting onboarding drops the account entirely
    send_text(&app, 1, "/set_profile").await;
    let reply = send_text(&app, 1, "/check_progress").await;
    assert_eq!(
        reply,
        "Сначала настройте профиль с помощью команды /set_profile"
    );

    // completing again starts from a zeroed ledger
    send_text(&app, 1, "80").await;
    send_text(&app, 1, "180").await;
    send_text(&app, 1, "40").await;
    send_text(&app, 1, "60").await;
    send_text(&app, 1, "Казань").await;

    let reply = send_text(&app, 1, "/check_progress").await;
    assert!(reply.contains("- Выпито: 0 мл"), "{reply}");
}

#[tokio::test]
async fn test_users_onboard_independently() {
    let (app, _state) = create_test_app();

    send_text(&app, 1, "/set_profile").await;
    send_text(&app, 1, "70").await;

    // a second user starts from the beginning, unaffected by the first
    let reply = send_text(&app, 2, "/set_profile").await;
    assert_eq!(reply, "Введите ваш вес (в кг):");

    // and the first user is still on the height question
    let reply = send_text(&app, 1, "170").await;
    assert_eq!(reply, "Введите ваш возраст:");
}
