// Test fixtures - reusable test data and widget doubles
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use scope_calendar::models::scope::CalendarScope;
use scope_calendar::ui_egui::{CalendarWidget, WidgetEvent};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Sunday, the day the screen was first built
    pub fn nov_13_2022() -> NaiveDate {
        ymd(2022, 11, 13)
    }

    /// Noon in Seoul on Nov 13, 2022
    pub fn nov_13_2022_noon_kst() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 11, 13, 3, 0, 0).unwrap()
    }

    pub fn new_years_eve_2022() -> NaiveDate {
        ymd(2022, 12, 31)
    }

    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    SetCurrentPage { date: NaiveDate, animated: bool },
    SetScope { scope: CalendarScope, animated: bool },
}

/// Widget double with no rendering: keeps pages as given, records every call
/// and raises a page-change callback whenever the page moves.
pub struct RecordingWidget {
    pub page: Option<NaiveDate>,
    pub calls: Vec<WidgetCall>,
    pending: Vec<WidgetEvent>,
}

impl RecordingWidget {
    pub fn at(page: NaiveDate) -> Self {
        Self {
            page: Some(page),
            calls: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn uninitialized() -> Self {
        Self {
            page: None,
            calls: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Simulates the user swiping to another page.
    pub fn swipe_to(&mut self, page: NaiveDate) {
        self.page = Some(page);
        self.pending.push(WidgetEvent::CurrentPageChanged);
    }

    pub fn last_scope(&self) -> Option<CalendarScope> {
        self.calls.iter().rev().find_map(|call| match call {
            WidgetCall::SetScope { scope, .. } => Some(*scope),
            _ => None,
        })
    }
}

impl CalendarWidget for RecordingWidget {
    fn current_page(&self) -> Option<NaiveDate> {
        self.page
    }

    fn set_current_page(&mut self, date: NaiveDate, animated: bool) {
        self.calls.push(WidgetCall::SetCurrentPage { date, animated });
        if self.page != Some(date) {
            self.page = Some(date);
            self.pending.push(WidgetEvent::CurrentPageChanged);
        }
    }

    fn set_scope(&mut self, scope: CalendarScope, animated: bool) {
        self.calls.push(WidgetCall::SetScope { scope, animated });
    }

    fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.pending)
    }
}
