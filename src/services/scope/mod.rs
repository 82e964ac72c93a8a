// Scope controller
// Owns the current display scope; the screen applies the side effects

use crate::models::scope::{CalendarScope, ToggleButtonState};

#[derive(Debug, Default)]
pub struct ScopeController {
    scope: CalendarScope,
}

impl ScopeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> CalendarScope {
        self.scope
    }

    /// Flips Week <-> Month and returns the new scope.
    pub fn toggle(&mut self) -> CalendarScope {
        self.scope = self.scope.toggled();
        log::debug!("Scope toggled to {:?}", self.scope);
        self.scope
    }

    pub fn button(&self) -> ToggleButtonState {
        self.scope.toggle_button()
    }
}
