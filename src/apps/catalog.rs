//! Built-in application catalogue: display titles and default window sizes.

use crate::window::Size;

pub const NOTEPAD: &str = "notepad";
pub const TERMINAL: &str = "terminal";
pub const PAINT: &str = "paint";
pub const MEDIA_PLAYER: &str = "media-player";
pub const SETTINGS: &str = "settings";
pub const FILE_EXPLORER: &str = "file-explorer";

/// Launchable app ids in launcher order.
pub const BUILTIN_APPS: [&str; 6] = [
    NOTEPAD,
    TERMINAL,
    PAINT,
    MEDIA_PLAYER,
    SETTINGS,
    FILE_EXPLORER,
];

pub fn app_title(app_id: &str) -> &'static str {
    match app_id {
        NOTEPAD => "Notepad",
        TERMINAL => "Terminal",
        PAINT => "Paint",
        MEDIA_PLAYER => "Media Player",
        SETTINGS => "Settings",
        FILE_EXPLORER => "File Explorer",
        _ => "Application",
    }
}

pub fn default_size(app_id: &str) -> Size {
    match app_id {
        NOTEPAD => Size::new(600, 400),
        TERMINAL | SETTINGS => Size::new(700, 500),
        PAINT => Size::new(800, 600),
        MEDIA_PLAYER => Size::new(500, 400),
        FILE_EXPLORER => Size::new(800, 500),
        _ => Size::new(600, 400),
    }
}
