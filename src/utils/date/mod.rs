// Date utility functions
// Week arithmetic shared by header formatting and the calendar widget

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Locale-dependent rules deciding how days group into weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRules {
    pub first_weekday: Weekday,
    /// Minimal number of days the first week of a month/year must contain
    pub min_days_in_first_week: u8,
}

impl WeekRules {
    pub const SUNDAY_FIRST: WeekRules = WeekRules {
        first_weekday: Weekday::Sun,
        min_days_in_first_week: 1,
    };

    pub const ISO: WeekRules = WeekRules {
        first_weekday: Weekday::Mon,
        min_days_in_first_week: 4,
    };

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self {
            first_weekday,
            ..self
        }
    }

    /// Days between the start of the week and `date`, 0..=6.
    fn offset_in_week(&self, date: NaiveDate) -> i64 {
        let day = date.weekday().num_days_from_sunday() as i64;
        let first = self.first_weekday.num_days_from_sunday() as i64;
        (day - first).rem_euclid(7)
    }

    /// Whether a partial leading week of `7 - offset` days counts as week 1.
    fn leading_week_counts(&self, offset: i64) -> bool {
        7 - offset >= self.min_days_in_first_week as i64
    }
}

impl Default for WeekRules {
    fn default() -> Self {
        Self::SUNDAY_FIRST
    }
}

/// Clamped to `NaiveDate::MIN` when the week starts before the first
/// representable day.
pub fn start_of_week(date: NaiveDate, rules: &WeekRules) -> NaiveDate {
    date.checked_sub_signed(Duration::days(rules.offset_in_week(date)))
        .unwrap_or(NaiveDate::MIN)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Week number inside the month of `date`, where 0 means the date falls in a
/// leading week too short to count under `rules`.
pub fn week_of_month(date: NaiveDate, rules: &WeekRules) -> u32 {
    let offset = rules.offset_in_week(first_of_month(date));
    let base = (date.day0() as i64 + offset) / 7;
    let lead = if rules.leading_week_counts(offset) { 1 } else { 0 };
    (base + lead) as u32
}

/// First day of week 1 of the week-based `year`, or `None` when that day is
/// outside chrono's representable range.
fn first_week_start(year: i32, rules: &WeekRules) -> Option<NaiveDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = rules.offset_in_week(jan_first);
    let week_start = jan_first.checked_sub_signed(Duration::days(offset))?;
    if rules.leading_week_counts(offset) {
        Some(week_start)
    } else {
        week_start.checked_add_signed(Duration::weeks(1))
    }
}

/// Year that owns the week containing `date`. Differs from the calendar year
/// for days at the edges of December and January. At the ends of the
/// representable range, where a neighbouring week 1 cannot be built, the
/// calendar year is used.
pub fn week_based_year(date: NaiveDate, rules: &WeekRules) -> i32 {
    let year = date.year();
    if let Some(next_start) = first_week_start(year + 1, rules) {
        if date >= next_start {
            return year + 1;
        }
    }
    match first_week_start(year, rules) {
        Some(start) if date < start => year - 1,
        _ => year,
    }
}

pub fn week_of_year(date: NaiveDate, rules: &WeekRules) -> u32 {
    let start = first_week_start(week_based_year(date, rules), rules)
        .or_else(|| NaiveDate::from_ymd_opt(date.year(), 1, 1))
        .unwrap_or(date);
    let weeks = (date - start).num_days().max(0) / 7 + 1;
    u32::try_from(weeks).unwrap_or(u32::MAX)
}

/// Number of week rows needed to lay out the month containing `date`.
pub fn weeks_in_month_grid(date: NaiveDate, rules: &WeekRules) -> u32 {
    let first = first_of_month(date);
    let days_in_month = days_in_month(first);
    let offset = rules.offset_in_week(first);
    ((offset + days_in_month as i64 + 6) / 7) as u32
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(chrono::Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // Only December of the last representable year has no successor
        None => 31,
    }
}
