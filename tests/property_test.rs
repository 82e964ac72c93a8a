// Property-based tests for scope toggling, navigation and header formatting

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use scope_calendar::models::scope::CalendarScope;
use scope_calendar::services::header::{CompiledPattern, HeaderFormatter, Locale};
use scope_calendar::services::navigation::{next_period, previous_period};
use scope_calendar::services::scope::ScopeController;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 through roughly 2199
    (0i64..109_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_scope() -> impl Strategy<Value = CalendarScope> {
    prop_oneof![Just(CalendarScope::Week), Just(CalendarScope::Month)]
}

proptest! {
    /// Property: navigating forward then back (or back then forward) is the identity
    #[test]
    fn prop_navigation_round_trip(date in any_date()) {
        prop_assert_eq!(next_period(previous_period(date)), date);
        prop_assert_eq!(previous_period(next_period(date)), date);
    }

    /// Property: one step is always exactly seven days on the same weekday
    #[test]
    fn prop_next_period_is_one_week(date in any_date()) {
        let next = next_period(date);
        prop_assert_eq!((next - date).num_days(), 7);
        prop_assert_eq!(next.weekday(), date.weekday());
    }

    /// Property: toggling twice returns to the starting scope
    #[test]
    fn prop_toggle_is_involution(scope in any_scope()) {
        prop_assert_eq!(scope.toggled().toggled(), scope);
    }

    /// Property: the controller alternates on every toggle
    #[test]
    fn prop_controller_parity(toggles in 0usize..50) {
        let mut controller = ScopeController::new();
        for _ in 0..toggles {
            controller.toggle();
        }
        let expected = if toggles % 2 == 0 { CalendarScope::Week } else { CalendarScope::Month };
        prop_assert_eq!(controller.scope(), expected);
    }

    /// Property: format uses exactly the pattern mapped from the scope, and
    /// earlier calls never leak into later ones
    #[test]
    fn prop_format_uses_scope_pattern(
        first in any_date(),
        second in any_date(),
        first_scope in any_scope(),
        second_scope in any_scope(),
    ) {
        let formatter = HeaderFormatter::korean();
        let expected_first = CompiledPattern::compile(formatter.pattern(first_scope))
            .unwrap()
            .render(first, &Locale::KOREAN);

        let before = formatter.format(first, first_scope);
        let _ = formatter.format(second, second_scope);
        let after = formatter.format(first, first_scope);

        prop_assert_eq!(&before, &expected_first);
        prop_assert_eq!(before, after);
    }

    /// Property: the month header is a prefix of the week header for the same date
    #[test]
    fn prop_month_header_prefixes_week_header(date in any_date()) {
        let formatter = HeaderFormatter::korean();
        let week = formatter.format(date, CalendarScope::Week);
        let month = formatter.format(date, CalendarScope::Month);
        prop_assert!(week.starts_with(&month));
        prop_assert!(week.ends_with("주차"));
    }
}
