//! Mobile navigation drawer.
//!
//! Two states, closed (initial) and open. Opening marks the drawer and its
//! overlay and locks page scroll; closing clears both markers and restores
//! scroll. Close is unconditional so a stray close on a closed drawer still
//! leaves the DOM clean.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

/// Key name the browser reports for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// DOM work requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    /// Add the open/visible markers and lock body scroll.
    Show,
    /// Remove both markers and restore body scroll.
    Hide,
}

#[derive(Debug, Clone, Default)]
pub struct DrawerController {
    state: DrawerState,
}

impl DrawerController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Open control activated.
    pub fn open(&mut self) -> Vec<DrawerAction> {
        if self.is_open() {
            return Vec::new();
        }
        self.state = DrawerState::Open;
        log::debug!("drawer: open");
        vec![DrawerAction::Show]
    }

    /// Close control, overlay click, or in-page navigation.
    pub fn close(&mut self) -> Vec<DrawerAction> {
        if self.is_open() {
            log::debug!("drawer: close");
        }
        self.state = DrawerState::Closed;
        vec![DrawerAction::Hide]
    }

    /// Document-level key press. Only escape while open does anything.
    pub fn on_key(&mut self, key: &str) -> Vec<DrawerAction> {
        if key == ESCAPE_KEY && self.is_open() {
            return self.close();
        }
        Vec::new()
    }
}
