use std::fmt;

use ratatui::style::Color;

/// Desktop colour scheme. Toggled from the settings application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub desktop_bg: Color,
    pub desktop_fg: Color,
    pub window_bg: Color,
    pub window_fg: Color,
    pub border: Color,
    pub border_active: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub header_active_bg: Color,
    pub close_fg: Color,
    pub taskbar_bg: Color,
    pub taskbar_fg: Color,
    pub taskbar_active_bg: Color,
    pub taskbar_active_fg: Color,
}

// Slate tones of the browser desktop, approximated per scheme.
const DARK: Palette = Palette {
    desktop_bg: Color::Rgb(15, 23, 42),
    desktop_fg: Color::Rgb(148, 163, 184),
    window_bg: Color::Rgb(30, 41, 59),
    window_fg: Color::White,
    border: Color::Rgb(51, 65, 85),
    border_active: Color::Rgb(100, 116, 139),
    header_bg: Color::Rgb(15, 23, 42),
    header_fg: Color::Rgb(148, 163, 184),
    header_active_bg: Color::Rgb(15, 23, 42),
    close_fg: Color::Rgb(239, 68, 68),
    taskbar_bg: Color::Rgb(15, 23, 42),
    taskbar_fg: Color::Rgb(203, 213, 225),
    taskbar_active_bg: Color::Rgb(51, 65, 85),
    taskbar_active_fg: Color::White,
};

const LIGHT: Palette = Palette {
    desktop_bg: Color::Rgb(226, 232, 240),
    desktop_fg: Color::Rgb(71, 85, 105),
    window_bg: Color::Rgb(248, 250, 252),
    window_fg: Color::Rgb(15, 23, 42),
    border: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(100, 116, 139),
    header_bg: Color::Rgb(226, 232, 240),
    header_fg: Color::Rgb(71, 85, 105),
    header_active_bg: Color::Rgb(203, 213, 225),
    close_fg: Color::Rgb(220, 38, 38),
    taskbar_bg: Color::Rgb(241, 245, 249),
    taskbar_fg: Color::Rgb(51, 65, 85),
    taskbar_active_bg: Color::Rgb(203, 213, 225),
    taskbar_active_fg: Color::Rgb(15, 23, 42),
};
