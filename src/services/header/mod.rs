//! Header text formatting.
//!
//! `HeaderFormatter` renders the label above the calendar grid: the current
//! page date under the pattern mapped from the active scope, in a fixed
//! locale and time zone. All configuration is passed in at construction so
//! formatting itself is a pure function of `(date, scope)`.

mod locale;
mod pattern;

pub use locale::{Language, Locale};
pub use pattern::{CompiledPattern, Field, Segment};

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::scope::CalendarScope;
use crate::models::settings::{Settings, DEFAULT_MONTH_PATTERN, DEFAULT_WEEK_PATTERN};

#[derive(Debug, Error, PartialEq)]
pub enum HeaderError {
    #[error("unsupported pattern field '{0}'")]
    UnsupportedField(char),
    #[error("unterminated quote in pattern \"{0}\"")]
    UnterminatedQuote(String),
    #[error("unknown locale \"{0}\"")]
    UnknownLocale(String),
    #[error("unknown time zone \"{0}\"")]
    UnknownTimeZone(String),
    #[error("first day of week out of range: {0}")]
    InvalidFirstWeekday(u8),
}

/// Scope -> pattern mapping used by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPatterns {
    pub week: String,
    pub month: String,
}

#[derive(Debug, Clone)]
pub struct HeaderFormatter {
    week: CompiledPattern,
    month: CompiledPattern,
    locale: Locale,
    time_zone: Tz,
}

impl HeaderFormatter {
    pub fn new(patterns: &HeaderPatterns, locale: Locale, time_zone: Tz) -> Result<Self, HeaderError> {
        Ok(Self {
            week: CompiledPattern::compile(&patterns.week)?,
            month: CompiledPattern::compile(&patterns.month)?,
            locale,
            time_zone,
        })
    }

    /// Korean locale, KST, and the default week/month patterns.
    pub fn korean() -> Self {
        Self {
            week: CompiledPattern::compile(DEFAULT_WEEK_PATTERN)
                .expect("default week pattern compiles"),
            month: CompiledPattern::compile(DEFAULT_MONTH_PATTERN)
                .expect("default month pattern compiles"),
            locale: Locale::KOREAN,
            time_zone: chrono_tz::Asia::Seoul,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, HeaderError> {
        let mut locale = Locale::parse(&settings.locale)?;
        if let Some(day) = settings.first_day_of_week {
            locale = locale.with_first_weekday(weekday_from_index(day)?);
        }
        let time_zone = resolve_time_zone(&settings.time_zone)?;
        let patterns = HeaderPatterns {
            week: settings.week_header_pattern.clone(),
            month: settings.month_header_pattern.clone(),
        };
        Self::new(&patterns, locale, time_zone)
    }

    pub fn pattern(&self, scope: CalendarScope) -> &str {
        self.compiled(scope).source()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn format(&self, date: NaiveDate, scope: CalendarScope) -> String {
        self.compiled(scope).render(date, &self.locale)
    }

    /// Formats the calendar date `instant` falls on in the configured zone.
    pub fn format_instant(&self, instant: DateTime<Utc>, scope: CalendarScope) -> String {
        self.format(self.local_date(instant), scope)
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.time_zone).date_naive()
    }

    fn compiled(&self, scope: CalendarScope) -> &CompiledPattern {
        match scope {
            CalendarScope::Week => &self.week,
            CalendarScope::Month => &self.month,
        }
    }
}

impl Default for HeaderFormatter {
    fn default() -> Self {
        Self::korean()
    }
}

/// Resolves an IANA zone name, accepting the abbreviations `KST` and `UTC`.
pub fn resolve_time_zone(name: &str) -> Result<Tz, HeaderError> {
    match name.trim() {
        "KST" => Ok(chrono_tz::Asia::Seoul),
        "UTC" | "GMT" => Ok(chrono_tz::UTC),
        other => Tz::from_str(other).map_err(|_| HeaderError::UnknownTimeZone(name.to_string())),
    }
}

fn weekday_from_index(day: u8) -> Result<Weekday, HeaderError> {
    match day {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(HeaderError::InvalidFirstWeekday(other)),
    }
}
