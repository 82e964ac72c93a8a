// Page navigation
// Adjacent-week arithmetic for the previous/next buttons. Both scopes step by
// one week; the widget snaps the result to its own page start.

use chrono::{Duration, NaiveDate};

pub fn shift_weeks(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::weeks(delta)
}

pub fn next_period(date: NaiveDate) -> NaiveDate {
    shift_weeks(date, 1)
}

pub fn previous_period(date: NaiveDate) -> NaiveDate {
    shift_weeks(date, -1)
}
