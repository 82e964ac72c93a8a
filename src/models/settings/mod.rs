// Settings module
// User-editable configuration loaded from settings.toml

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WEEK_PATTERN: &str = "YYYY년 MM월 W주차";
pub const DEFAULT_MONTH_PATTERN: &str = "YYYY년 MM월";

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    FirstDayOutOfRange(u8),
    #[error("calendar_height must be positive, got {0}")]
    NonPositiveHeight(f32),
    #[error("{0} header pattern must not be empty")]
    EmptyPattern(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale identifier such as "ko_KR" or "en_US"
    pub locale: String,
    /// IANA zone name, or one of the abbreviations "KST" / "UTC"
    pub time_zone: String,
    pub week_header_pattern: String,
    pub month_header_pattern: String,
    /// Overrides the locale's first weekday (0 = Sunday)
    pub first_day_of_week: Option<u8>,
    /// Height of the calendar container before the widget reports its own
    pub calendar_height: f32,
    /// Text shown below the calendar
    pub caption: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "ko_KR".to_string(),
            time_zone: "KST".to_string(),
            week_header_pattern: DEFAULT_WEEK_PATTERN.to_string(),
            month_header_pattern: DEFAULT_MONTH_PATTERN.to_string(),
            first_day_of_week: None,
            calendar_height: 300.0,
            caption: "라벨입니다".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(day) = self.first_day_of_week {
            if day > 6 {
                return Err(SettingsError::FirstDayOutOfRange(day));
            }
        }
        if self.calendar_height <= 0.0 || !self.calendar_height.is_finite() {
            return Err(SettingsError::NonPositiveHeight(self.calendar_height));
        }
        if self.week_header_pattern.trim().is_empty() {
            return Err(SettingsError::EmptyPattern("week"));
        }
        if self.month_header_pattern.trim().is_empty() {
            return Err(SettingsError::EmptyPattern("month"));
        }
        Ok(())
    }
}
