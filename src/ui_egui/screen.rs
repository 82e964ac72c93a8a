//! The calendar screen: owns the widget, the scope state and the header.
//!
//! Every path that can change the page or the scope ends by re-formatting the
//! header from the widget's authoritative current page, so the label never
//! drifts from what the widget shows.

use chrono::{DateTime, NaiveDate, Utc};

use super::widget::{CalendarWidget, WidgetBounds, WidgetEvent};
use crate::models::scope::{CalendarScope, ToggleButtonState};
use crate::services::header::HeaderFormatter;
use crate::services::navigation::{next_period, previous_period};
use crate::services::scope::ScopeController;

pub struct CalendarScreen<W: CalendarWidget> {
    widget: W,
    scope: ScopeController,
    formatter: HeaderFormatter,
    header_text: String,
    container_height: f32,
}

impl<W: CalendarWidget> CalendarScreen<W> {
    /// Wires the widget up in week scope. The header starts out formatted
    /// from `now` until the widget reports its first page.
    pub fn new(
        mut widget: W,
        formatter: HeaderFormatter,
        now: DateTime<Utc>,
        container_height: f32,
    ) -> Self {
        let scope = ScopeController::new();
        widget.set_scope(scope.scope(), false);
        let header_text = formatter.format_instant(now, scope.scope());
        log::debug!("Calendar screen initialized with header {header_text:?}");

        Self {
            widget,
            scope,
            formatter,
            header_text,
            container_height,
        }
    }

    pub fn scope(&self) -> CalendarScope {
        self.scope.scope()
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn toggle_button(&self) -> ToggleButtonState {
        self.scope.button()
    }

    pub fn header_pattern(&self) -> &str {
        self.formatter.pattern(self.scope.scope())
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Toggle button handler.
    pub fn toggle_scope(&mut self) -> CalendarScope {
        let scope = self.scope.toggle();
        self.widget.set_scope(scope, true);
        self.refresh_header();
        scope
    }

    /// Right arrow handler. The header follows once the widget reports the page.
    pub fn show_next_week(&mut self) {
        let target = next_period(self.current_page());
        log::debug!("Moving calendar to next week: {target}");
        self.widget.set_current_page(target, true);
    }

    /// Left arrow handler.
    pub fn show_previous_week(&mut self) {
        let target = previous_period(self.current_page());
        log::debug!("Moving calendar to previous week: {target}");
        self.widget.set_current_page(target, true);
    }

    /// Page-change callback.
    pub fn on_current_page_changed(&mut self) {
        self.refresh_header();
    }

    /// Bounds-change callback: the container follows the widget's height.
    pub fn on_bounds_will_change(&mut self, bounds: WidgetBounds, animated: bool) {
        log::debug!(
            "Calendar bounds changing to {}x{} (animated: {animated})",
            bounds.width,
            bounds.height
        );
        self.container_height = bounds.height;
    }

    pub fn handle_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::CurrentPageChanged => self.on_current_page_changed(),
            WidgetEvent::BoundsWillChange { bounds, animated } => {
                self.on_bounds_will_change(bounds, animated)
            }
        }
    }

    /// Dispatch every callback the widget has queued.
    pub fn process_widget_events(&mut self) {
        for event in self.widget.drain_events() {
            self.handle_event(event);
        }
    }

    fn refresh_header(&mut self) {
        let page = self.current_page();
        self.header_text = self.formatter.format(page, self.scope.scope());
    }

    /// # Panics
    ///
    /// Panics if the widget has no current page. Once initialized the widget
    /// always has one, so this is a wiring bug rather than a runtime error.
    fn current_page(&self) -> NaiveDate {
        match self.widget.current_page() {
            Some(page) => page,
            None => {
                log::error!("Calendar widget reported no current page");
                panic!("calendar widget has no current page; was it initialized?");
            }
        }
    }
}
