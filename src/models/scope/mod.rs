// Calendar scope model
// Display granularity of the calendar and the toggle button it maps to

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarScope {
    #[default]
    Week,
    Month,
}

/// Arrow shown next to the toggle button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Shown while in week scope: pressing expands to month
    Down,
    /// Shown while in month scope: pressing collapses to week
    Up,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Down => "⏷",
            ToggleIcon::Up => "⏶",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleButtonState {
    pub label: &'static str,
    pub icon: ToggleIcon,
}

impl CalendarScope {
    pub fn toggled(self) -> Self {
        match self {
            CalendarScope::Week => CalendarScope::Month,
            CalendarScope::Month => CalendarScope::Week,
        }
    }

    pub fn toggle_button(self) -> ToggleButtonState {
        match self {
            CalendarScope::Week => ToggleButtonState {
                label: "주",
                icon: ToggleIcon::Down,
            },
            CalendarScope::Month => ToggleButtonState {
                label: "월",
                icon: ToggleIcon::Up,
            },
        }
    }
}
