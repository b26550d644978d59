//! Context handed to application views.
//!
//! `ViewContext` carries read-only UI metadata for rendering. `ShellContext`
//! is the fixed set of desktop callbacks every view receives, whether or not
//! it uses them.

use crate::state::ShellState;
use crate::theme::Theme;

/// Rendering metadata for an application view.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    focused: bool,
    theme: Theme,
}

impl ViewContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            theme: Theme::Dark,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Desktop callbacks: wallpaper setter, theme toggle and current theme.
#[derive(Debug)]
pub struct ShellContext<'a> {
    state: &'a mut ShellState,
}

impl<'a> ShellContext<'a> {
    pub fn new(state: &'a mut ShellState) -> Self {
        Self { state }
    }

    pub fn change_wallpaper(&mut self, wallpaper: &str) {
        tracing::debug!(wallpaper, "wallpaper changed");
        self.state.set_wallpaper(wallpaper);
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        tracing::debug!(theme = %self.state.theme(), "theme toggled");
    }

    pub fn current_theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn current_wallpaper(&self) -> &str {
        self.state.wallpaper()
    }
}
