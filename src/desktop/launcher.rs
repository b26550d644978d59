//! Mouse launchers: the start menu opened from the taskbar and the column
//! of desktop icons.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use super::taskbar::START_LABEL;
use crate::apps::catalog::{self, BUILTIN_APPS, app_title};
use crate::constants::DOUBLE_CLICK_MILLIS;
use crate::theme::Palette;

const MENU_HEADER: &str = "Applications";
const ICON_WIDTH: u16 = 18;
const ICON_SPACING: u16 = 2;

/// Clickable launcher row, either a menu item or a desktop icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherHit {
    pub app_id: &'static str,
    pub rect: Rect,
}

fn hit_at(hits: &[LauncherHit], column: u16, row: u16) -> Option<&'static str> {
    hits.iter()
        .find(|hit| hit.rect.contains(Position::new(column, row)))
        .map(|hit| hit.app_id)
}

fn glyph(app_id: &str) -> &'static str {
    match app_id {
        catalog::NOTEPAD => "≡",
        catalog::TERMINAL => ">",
        catalog::PAINT => "✎",
        catalog::MEDIA_PLAYER => "♪",
        catalog::SETTINGS => "⚙",
        catalog::FILE_EXPLORER => "▤",
        _ => "□",
    }
}

/// Start button on the taskbar's middle row.
pub fn start_button(taskbar: Rect) -> Rect {
    if taskbar.is_empty() {
        return Rect::default();
    }
    let width = (START_LABEL.chars().count() as u16).min(taskbar.width);
    Rect::new(taskbar.x, taskbar.y + taskbar.height / 2, width, 1)
}

#[derive(Debug, Clone, Default)]
pub struct StartMenu {
    open: bool,
}

impl StartMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Menu frame anchored to the left of `taskbar`, growing upwards into
    /// `desktop`. Empty when there is no room.
    pub fn bounds(desktop: Rect, taskbar: Rect) -> Rect {
        let label_width = BUILTIN_APPS
            .iter()
            .map(|app| app_title(app).chars().count() as u16 + 4)
            .max()
            .unwrap_or(0)
            .max(MENU_HEADER.chars().count() as u16);
        let width = (label_width + 2).min(desktop.width);
        let height = (BUILTIN_APPS.len() as u16 + 3).min(desktop.height);
        if width < 3 || height < 3 {
            return Rect::default();
        }
        let bottom = taskbar.y.min(desktop.bottom());
        Rect::new(desktop.x, bottom.saturating_sub(height), width, height)
    }

    /// One row per built-in app below the header. Rows clipped by a short
    /// desktop are left off.
    pub fn items(desktop: Rect, taskbar: Rect) -> Vec<LauncherHit> {
        let frame = Self::bounds(desktop, taskbar);
        if frame.is_empty() {
            return Vec::new();
        }
        let inner_bottom = frame.bottom().saturating_sub(1);
        (0u16..)
            .zip(BUILTIN_APPS)
            .map(|(idx, app_id)| LauncherHit {
                app_id,
                rect: Rect::new(frame.x + 1, frame.y + 2 + idx, frame.width - 2, 1),
            })
            .take_while(|hit| hit.rect.y < inner_bottom)
            .collect()
    }

    pub fn item_at(desktop: Rect, taskbar: Rect, column: u16, row: u16) -> Option<&'static str> {
        hit_at(&Self::items(desktop, taskbar), column, row)
    }

    pub fn render(&self, frame: &mut Frame, desktop: Rect, taskbar: Rect, palette: &Palette) {
        if !self.open {
            return;
        }
        let rect = Self::bounds(desktop, taskbar).intersection(frame.area());
        if rect.is_empty() {
            return;
        }
        let base = Style::default().bg(palette.taskbar_bg).fg(palette.taskbar_fg);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border_active))
                .style(base),
            rect,
        );
        let buffer = frame.buffer_mut();
        buffer.set_string(
            rect.x + 1,
            rect.y + 1,
            MENU_HEADER,
            base.add_modifier(Modifier::DIM),
        );
        for hit in Self::items(desktop, taskbar) {
            let label = format!(" {} {}", glyph(hit.app_id), app_title(hit.app_id));
            buffer.set_stringn(hit.rect.x, hit.rect.y, label, usize::from(hit.rect.width), base);
        }
    }
}

/// Icon column in the top-left corner of the desktop. A click selects an
/// icon; a second click on the same icon within the double-click window
/// launches its app.
#[derive(Debug, Clone, Default)]
pub struct DesktopIcons {
    selected: Option<&'static str>,
    last_click: Option<(&'static str, Instant)>,
}

impl DesktopIcons {
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.last_click = None;
    }

    pub fn layout(desktop: Rect) -> Vec<LauncherHit> {
        if desktop.width < ICON_WIDTH + 1 {
            return Vec::new();
        }
        (0u16..)
            .zip(BUILTIN_APPS)
            .map(|(idx, app_id)| LauncherHit {
                app_id,
                rect: Rect::new(desktop.x + 1, desktop.y + 1 + idx * ICON_SPACING, ICON_WIDTH, 1),
            })
            .take_while(|hit| hit.rect.bottom() <= desktop.bottom())
            .collect()
    }

    /// Handle a press at a desktop cell. Returns the app to launch on a
    /// double click.
    pub fn click(&mut self, desktop: Rect, column: u16, row: u16, now: Instant) -> Option<&'static str> {
        let Some(app_id) = hit_at(&Self::layout(desktop), column, row) else {
            self.clear_selection();
            return None;
        };
        self.selected = Some(app_id);
        let threshold = Duration::from_millis(DOUBLE_CLICK_MILLIS);
        if let Some((prev, at)) = self.last_click
            && prev == app_id
            && now.saturating_duration_since(at) <= threshold
        {
            self.last_click = None;
            return Some(app_id);
        }
        self.last_click = Some((app_id, now));
        None
    }

    pub fn render(&self, frame: &mut Frame, desktop: Rect, palette: &Palette) {
        let buffer = frame.buffer_mut();
        let base = Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg);
        for hit in Self::layout(desktop) {
            let style = if self.selected == Some(hit.app_id) {
                Style::default()
                    .bg(palette.taskbar_active_bg)
                    .fg(palette.taskbar_active_fg)
            } else {
                base
            };
            let label = format!(" {} {}", glyph(hit.app_id), app_title(hit.app_id));
            buffer.set_stringn(hit.rect.x, hit.rect.y, label, usize::from(hit.rect.width), style);
        }
    }
}
