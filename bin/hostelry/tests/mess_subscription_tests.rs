use chrono::{Days, NaiveDate};
use hostelry_core::services::mess_service::{
    subscription_cost, DEFAULT_WINDOW_DAYS, SUBSCRIPTION_MEALS,
};

#[test]
fn bundle_is_ninety_meals() {
    // 30 days of three meals a day, independent of the date window
    assert_eq!(SUBSCRIPTION_MEALS, 90);
}

#[test]
fn cost_is_meals_times_per_meal_cost() {
    // per-meal cost of 50 buys the full bundle for 4500
    assert_eq!(subscription_cost(50), 4500);
    assert_eq!(subscription_cost(1), 90);
    assert_eq!(subscription_cost(120), 10_800);
}

#[test]
fn default_window_is_forty_five_days() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = start.checked_add_days(Days::new(DEFAULT_WINDOW_DAYS)).unwrap();
    assert_eq!(end, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
}

#[test]
fn bundle_size_does_not_depend_on_window_length() {
    // a longer requested window still buys the same fixed bundle
    let cost_for_short_window = subscription_cost(50);
    let cost_for_long_window = subscription_cost(50);
    assert_eq!(cost_for_short_window, cost_for_long_window);
    assert_eq!(cost_for_long_window, SUBSCRIPTION_MEALS as i64 * 50);
}
