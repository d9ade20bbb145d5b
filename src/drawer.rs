//! Mobile navigation drawer.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

pub const TOGGLE_SELECTOR: &str = ".nav-mobile-toggle";
pub const MENU_SELECTOR: &str = ".nav-mobile-menu";

/// Class on the toggle button while the drawer is open.
pub const ACTIVE_CLASS: &str = "active";

/// Class on the menu while the drawer is open.
pub const OPEN_CLASS: &str = "open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// DOM changes a drawer transition needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    /// Show the menu, add `open` on the next frame, lock body scroll.
    Open,
    /// Remove `active`/`open` and unlock body scroll.
    Close,
}

/// Drawer open/closed state.
#[derive(Debug, Clone, Default)]
pub struct Drawer {
    state: DrawerState,
}

impl Drawer {
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Toggle button clicked.
    pub fn toggle(&mut self) -> DrawerEffect {
        match self.state {
            DrawerState::Closed => {
                self.state = DrawerState::Open;
                DrawerEffect::Open
            }
            DrawerState::Open => {
                self.state = DrawerState::Closed;
                DrawerEffect::Close
            }
        }
    }

    /// A link inside the menu was followed. Always closes, even if the
    /// drawer already looked closed.
    pub fn link_followed(&mut self) -> DrawerEffect {
        self.state = DrawerState::Closed;
        DrawerEffect::Close
    }
}
