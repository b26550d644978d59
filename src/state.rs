use crate::theme::Theme;

/// Wallpapers offered by the settings application.
pub const WALLPAPERS: [&str; 7] = [
    "dark-mountains",
    "abstract-purple",
    "cyber-city",
    "geometric",
    "mountain-lake",
    "night-sky",
    "space-nebula",
];

/// Desktop-wide settings that applications may change through the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    theme: Theme,
    wallpaper: String,
    theme_dirty: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            wallpaper: WALLPAPERS[0].to_string(),
            theme_dirty: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.theme_dirty = true;
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggled();
        self.set_theme(theme);
    }

    /// Report a theme change once, then forget it.
    pub fn take_theme_change(&mut self) -> Option<Theme> {
        if self.theme_dirty {
            self.theme_dirty = false;
            Some(self.theme)
        } else {
            None
        }
    }

    pub fn wallpaper(&self) -> &str {
        &self.wallpaper
    }

    pub fn set_wallpaper(&mut self, wallpaper: impl Into<String>) {
        self.wallpaper = wallpaper.into();
    }
}
