//! Narrow interface to the embedded calendar widget.
//!
//! The screen only ever reads the current page, asks for a new page or scope,
//! and receives the widget's two callbacks. Anything that can do that (the
//! painted `PagedCalendar`, or a test double) can sit behind it.

use chrono::NaiveDate;

use crate::models::scope::CalendarScope;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetBounds {
    pub width: f32,
    pub height: f32,
}

/// Callbacks raised by the widget, delivered through `drain_events`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// The displayed page changed; read `current_page` for the new value
    CurrentPageChanged,
    /// The widget is about to resize, usually after a scope change
    BoundsWillChange { bounds: WidgetBounds, animated: bool },
}

pub trait CalendarWidget {
    /// Date of the page on display. `None` only before the widget is set up.
    fn current_page(&self) -> Option<NaiveDate>;

    fn set_current_page(&mut self, date: NaiveDate, animated: bool);

    fn set_scope(&mut self, scope: CalendarScope, animated: bool);

    /// Take the callbacks queued since the last call.
    fn drain_events(&mut self) -> Vec<WidgetEvent> {
        Vec::new()
    }
}
