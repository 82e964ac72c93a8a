//! Locale identifiers and the naming / week rules derived from them.

use chrono::{Datelike, NaiveDate, Weekday};

use super::HeaderError;
use crate::utils::date::WeekRules;

/// Regions whose calendars start the week on Sunday with a one-day first week.
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "KR", "US", "JP", "CA", "TW", "HK", "MX", "BR", "IL", "PH", "AU", "ZA", "IN",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub language: Language,
    pub week_rules: WeekRules,
}

impl Locale {
    pub const KOREAN: Locale = Locale {
        language: Language::Korean,
        week_rules: WeekRules::SUNDAY_FIRST,
    };

    /// Parses identifiers such as `ko_KR`, `ko-kr`, `en_US` or `en_GB`.
    /// A bare language falls back to that language's home region.
    pub fn parse(identifier: &str) -> Result<Self, HeaderError> {
        let mut parts = identifier.trim().split(['_', '-']);
        let language_code = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        let (language, default_region) = match language_code.as_str() {
            "ko" => (Language::Korean, "KR"),
            "en" => (Language::English, "US"),
            _ => return Err(HeaderError::UnknownLocale(identifier.to_string())),
        };
        let region = region.as_deref().unwrap_or(default_region);

        let week_rules = if SUNDAY_FIRST_REGIONS.contains(&region) {
            WeekRules::SUNDAY_FIRST
        } else {
            WeekRules::ISO
        };

        Ok(Self {
            language,
            week_rules,
        })
    }

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self {
            week_rules: self.week_rules.with_first_weekday(first_weekday),
            ..self
        }
    }

    pub fn month_name(&self, date: NaiveDate, long: bool) -> String {
        match self.language {
            Language::Korean => format!("{}월", date.month()),
            Language::English => {
                let name = ENGLISH_MONTHS[date.month0() as usize];
                if long {
                    name.to_string()
                } else {
                    name[..3].to_string()
                }
            }
        }
    }

    pub fn weekday_name(&self, weekday: Weekday, long: bool) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match (self.language, long) {
            (Language::Korean, false) => KOREAN_WEEKDAYS_SHORT[index],
            (Language::Korean, true) => KOREAN_WEEKDAYS_LONG[index],
            (Language::English, false) => ENGLISH_WEEKDAYS_SHORT[index],
            (Language::English, true) => ENGLISH_WEEKDAYS_LONG[index],
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::KOREAN
    }
}

const KOREAN_WEEKDAYS_SHORT: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
const KOREAN_WEEKDAYS_LONG: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];
const ENGLISH_WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const ENGLISH_WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
