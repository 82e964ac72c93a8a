//! Painted week/month calendar implementing [`CalendarWidget`].
//!
//! Pages start on the first day of the week (week scope) or the first of the
//! month (month scope). Page and scope changes are queued as widget events for
//! the owning screen to pick up.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::widget::{CalendarWidget, WidgetBounds, WidgetEvent};
use crate::models::scope::CalendarScope;
use crate::services::header::Locale;
use crate::services::navigation::shift_weeks;
use crate::utils::date::{first_of_month, start_of_week, weeks_in_month_grid, WeekRules};

/// Height of the weekday name strip
pub const WEEKDAY_HEIGHT: f32 = 36.0;
/// Height of one row of day cells
pub const ROW_HEIGHT: f32 = 44.0;
/// Horizontal drag distance that turns the page
const SWIPE_THRESHOLD: f32 = 48.0;
const DAY_FONT_SIZE: f32 = 14.0;
const SELECTION_RADIUS: f32 = 15.0;

pub struct PagedCalendar {
    scope: CalendarScope,
    page: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    locale: Locale,
    width: f32,
    reported_height: f32,
    drag_offset: f32,
    events: Vec<WidgetEvent>,
}

impl PagedCalendar {
    /// Week scope, showing and selecting `today`.
    pub fn new(today: NaiveDate, locale: Locale) -> Self {
        let mut calendar = Self {
            scope: CalendarScope::Week,
            page: start_of_week(today, &locale.week_rules),
            selected: Some(today),
            today,
            locale,
            width: 0.0,
            reported_height: 0.0,
            drag_offset: 0.0,
            events: Vec::new(),
        };
        calendar.report_bounds_if_changed(false);
        calendar
    }

    pub fn scope(&self) -> CalendarScope {
        self.scope
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    /// Whether callbacks are waiting for `drain_events`.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn rules(&self) -> &WeekRules {
        &self.locale.week_rules
    }

    fn page_start(&self, date: NaiveDate, scope: CalendarScope) -> NaiveDate {
        match scope {
            CalendarScope::Week => start_of_week(date, self.rules()),
            CalendarScope::Month => first_of_month(date),
        }
    }

    pub fn page_contains(&self, date: NaiveDate) -> bool {
        self.page_start(date, self.scope) == self.page
    }

    pub fn row_count(&self) -> u32 {
        match self.scope {
            CalendarScope::Week => 1,
            CalendarScope::Month => weeks_in_month_grid(self.page, self.rules()),
        }
    }

    pub fn preferred_height(&self) -> f32 {
        WEEKDAY_HEIGHT + ROW_HEIGHT * self.row_count() as f32
    }

    /// Days laid out on the current page, row by row.
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let grid_start = start_of_week(self.page, self.rules());
        (0..self.row_count() as i64 * 7)
            .filter_map(|offset| grid_start.checked_add_signed(chrono::Duration::days(offset)))
            .collect()
    }

    fn is_placeholder(&self, day: NaiveDate) -> bool {
        self.scope == CalendarScope::Month && day.month() != self.page.month()
    }

    fn report_bounds_if_changed(&mut self, animated: bool) {
        let height = self.preferred_height();
        if height != self.reported_height {
            self.reported_height = height;
            self.events.push(WidgetEvent::BoundsWillChange {
                bounds: WidgetBounds {
                    width: self.width,
                    height,
                },
                animated,
            });
        }
    }

    fn move_to_page(&mut self, page: NaiveDate, animated: bool) {
        if page != self.page {
            self.page = page;
            self.events.push(WidgetEvent::CurrentPageChanged);
            self.report_bounds_if_changed(animated);
        }
    }

    fn turn_page(&mut self, forward: bool) {
        let target = match self.scope {
            CalendarScope::Week => Some(shift_weeks(self.page, if forward { 1 } else { -1 })),
            CalendarScope::Month if forward => self.page.checked_add_months(Months::new(1)),
            CalendarScope::Month => self.page.checked_sub_months(Months::new(1)),
        }
        .unwrap_or(self.page);
        self.set_current_page(target, true);
    }

    fn weekday_at(&self, column: usize) -> Weekday {
        let mut weekday = self.rules().first_weekday;
        for _ in 0..column {
            weekday = weekday.succ();
        }
        weekday
    }

    pub fn show(&mut self, ui: &mut egui::Ui, height: f32) -> egui::Response {
        self.width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(self.width, height), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let col_width = rect.width() / 7.0;
        let text_color = ui.visuals().text_color();
        let weak_color = ui.visuals().weak_text_color();

        for column in 0..7 {
            let center = Pos2::new(
                rect.left() + col_width * (column as f32 + 0.5),
                rect.top() + WEEKDAY_HEIGHT / 2.0,
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                self.locale.weekday_name(self.weekday_at(column), false),
                FontId::proportional(DAY_FONT_SIZE),
                text_color,
            );
        }

        let rows = self.row_count().max(1) as f32;
        let row_height = ((rect.height() - WEEKDAY_HEIGHT) / rows).max(0.0);
        let grid_top = rect.top() + WEEKDAY_HEIGHT;

        for (index, day) in self.visible_days().into_iter().enumerate() {
            if self.is_placeholder(day) {
                continue;
            }
            let (row, column) = (index / 7, index % 7);
            let center = Pos2::new(
                rect.left() + self.drag_offset + col_width * (column as f32 + 0.5),
                grid_top + row_height * (row as f32 + 0.5),
            );
            if center.y > rect.bottom() {
                continue;
            }

            let is_selected = self.selected == Some(day);
            if is_selected {
                painter.circle(center, SELECTION_RADIUS, Color32::RED, Stroke::NONE);
            }
            let color = if is_selected {
                Color32::WHITE
            } else if day == self.today {
                text_color
            } else {
                weak_color
            };
            painter.text(
                center,
                Align2::CENTER_CENTER,
                day.day().to_string(),
                FontId::proportional(DAY_FONT_SIZE),
                color,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(day) = self.day_at(rect, pos, row_height) {
                    self.selected = Some(day);
                }
            }
        }

        if response.dragged() {
            self.drag_offset += response.drag_delta().x;
        }
        if response.drag_stopped() {
            if self.drag_offset <= -SWIPE_THRESHOLD {
                self.turn_page(true);
            } else if self.drag_offset >= SWIPE_THRESHOLD {
                self.turn_page(false);
            }
            self.drag_offset = 0.0;
        }

        response
    }

    fn day_at(&self, rect: Rect, pos: Pos2, row_height: f32) -> Option<NaiveDate> {
        let grid_top = rect.top() + WEEKDAY_HEIGHT;
        if pos.y < grid_top || row_height <= 0.0 {
            return None;
        }
        let column = ((pos.x - rect.left()) / (rect.width() / 7.0)).floor() as usize;
        let row = ((pos.y - grid_top) / row_height).floor() as usize;
        if column > 6 {
            return None;
        }
        self.visible_days()
            .get(row * 7 + column)
            .copied()
            .filter(|day| !self.is_placeholder(*day))
    }
}

impl CalendarWidget for PagedCalendar {
    fn current_page(&self) -> Option<NaiveDate> {
        Some(self.page)
    }

    fn set_current_page(&mut self, date: NaiveDate, animated: bool) {
        let page = self.page_start(date, self.scope);
        self.move_to_page(page, animated);
    }

    fn set_scope(&mut self, scope: CalendarScope, animated: bool) {
        if scope == self.scope {
            return;
        }
        let anchor = match self.selected {
            Some(selected) if self.page_contains(selected) => selected,
            _ => self.page,
        };
        self.scope = scope;
        let page = self.page_start(anchor, scope);
        if page != self.page {
            self.page = page;
            self.events.push(WidgetEvent::CurrentPageChanged);
        }
        self.report_bounds_if_changed(animated);
    }

    fn drain_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar_on(today: NaiveDate) -> PagedCalendar {
        let mut calendar = PagedCalendar::new(today, Locale::KOREAN);
        calendar.drain_events();
        calendar
    }

    #[test]
    fn test_new_reports_initial_bounds() {
        let mut calendar = PagedCalendar::new(date(2022, 11, 16), Locale::KOREAN);
        assert_eq!(calendar.current_page(), Some(date(2022, 11, 13)));
        assert_eq!(calendar.selected(), Some(date(2022, 11, 16)));
        assert_eq!(
            calendar.drain_events(),
            vec![WidgetEvent::BoundsWillChange {
                bounds: WidgetBounds {
                    width: 0.0,
                    height: WEEKDAY_HEIGHT + ROW_HEIGHT
                },
                animated: false,
            }]
        );
    }

    #[test]
    fn test_set_current_page_snaps_to_week_start() {
        let mut calendar = calendar_on(date(2022, 11, 16));
        calendar.set_current_page(date(2022, 11, 23), true);
        assert_eq!(calendar.current_page(), Some(date(2022, 11, 20)));
        assert_eq!(calendar.drain_events(), vec![WidgetEvent::CurrentPageChanged]);

        // Same page again raises nothing
        calendar.set_current_page(date(2022, 11, 26), true);
        assert!(calendar.drain_events().is_empty());
    }

    #[test]
    fn test_set_scope_month_anchors_on_selection() {
        let mut calendar = calendar_on(date(2022, 11, 30));
        calendar.set_scope(CalendarScope::Month, true);
        assert_eq!(calendar.current_page(), Some(date(2022, 11, 1)));
        assert_eq!(calendar.row_count(), 5);

        let events = calendar.drain_events();
        assert!(events.contains(&WidgetEvent::CurrentPageChanged));
        assert!(events.iter().any(|e| matches!(
            e,
            WidgetEvent::BoundsWillChange { bounds, animated: true }
                if bounds.height == WEEKDAY_HEIGHT + ROW_HEIGHT * 5.0
        )));
    }

    #[test]
    fn test_set_scope_without_visible_selection_uses_page() {
        let mut calendar = calendar_on(date(2022, 11, 30));
        // Week of Nov 27 - Dec 3; move to the week of Dec 4 so the selection is off page
        calendar.set_current_page(date(2022, 12, 4), false);
        calendar.set_scope(CalendarScope::Month, true);
        assert_eq!(calendar.current_page(), Some(date(2022, 12, 1)));

        calendar.set_scope(CalendarScope::Week, true);
        // Selection (Nov 30) is not on the December page, so the month start anchors
        assert_eq!(calendar.current_page(), Some(date(2022, 11, 27)));
    }

    #[test]
    fn test_same_scope_is_a_no_op() {
        let mut calendar = calendar_on(date(2022, 11, 16));
        calendar.set_scope(CalendarScope::Week, false);
        assert!(calendar.drain_events().is_empty());
    }

    #[test]
    fn test_month_page_change_reports_new_height() {
        let mut calendar = calendar_on(date(2022, 11, 16));
        calendar.set_scope(CalendarScope::Month, false);
        calendar.drain_events();

        // October 2022 needs six rows
        calendar.set_current_page(date(2022, 10, 10), true);
        let events = calendar.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(calendar.preferred_height(), WEEKDAY_HEIGHT + ROW_HEIGHT * 6.0);
    }

    #[test]
    fn test_visible_days_week_and_month() {
        let mut calendar = calendar_on(date(2022, 11, 16));
        let week = calendar.visible_days();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2022, 11, 13));
        assert_eq!(week[6], date(2022, 11, 19));

        calendar.set_scope(CalendarScope::Month, false);
        let month = calendar.visible_days();
        assert_eq!(month.len(), 35);
        assert_eq!(month[0], date(2022, 10, 30));
        assert!(calendar.is_placeholder(month[0]));
        assert!(!calendar.is_placeholder(date(2022, 11, 1)));
    }

    #[test]
    fn test_turn_page_by_scope() {
        let mut calendar = calendar_on(date(2022, 11, 16));
        calendar.turn_page(true);
        assert_eq!(calendar.current_page(), Some(date(2022, 11, 20)));

        calendar.set_scope(CalendarScope::Month, false);
        calendar.turn_page(false);
        assert_eq!(calendar.current_page(), Some(date(2022, 10, 1)));
    }
}
