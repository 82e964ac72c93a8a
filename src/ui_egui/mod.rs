mod app;
mod fonts;
pub mod paged_calendar;
pub mod screen;
pub mod widget;

pub use app::ScopeCalendarApp;
pub use paged_calendar::PagedCalendar;
pub use screen::CalendarScreen;
pub use widget::{CalendarWidget, WidgetBounds, WidgetEvent};
