use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme::Palette;
use crate::window::{Window, WindowId, WindowManager};

pub const START_LABEL: &str = " ◆ Phantom ";

const MAX_LABEL_CHARS: usize = 16;

/// One window button on the taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub label: String,
    pub rect: Rect,
    pub active: bool,
    pub minimized: bool,
}

fn label_for(window: &Window) -> String {
    let title: String = window.title().chars().take(MAX_LABEL_CHARS).collect();
    format!(" {title} ")
}

/// Window buttons in opening order, laid out on the middle row of `area`.
/// Buttons that do not fit are left off.
pub fn layout(wm: &WindowManager, area: Rect) -> Vec<TaskbarEntry> {
    if area.is_empty() {
        return Vec::new();
    }
    let row = area.y + area.height / 2;
    let right = area.right();
    let mut x = area
        .x
        .saturating_add(START_LABEL.chars().count() as u16)
        .saturating_add(1);
    let mut entries = Vec::new();
    for window in wm.windows().iter() {
        let label = label_for(window);
        let width = label.chars().count() as u16;
        if x.saturating_add(width) > right {
            break;
        }
        entries.push(TaskbarEntry {
            id: window.id(),
            rect: Rect::new(x, row, width, 1),
            label,
            active: wm.active() == Some(window.id()),
            minimized: window.is_minimized(),
        });
        x = x.saturating_add(width).saturating_add(1);
    }
    entries
}

/// Entry under column `column`, ignoring the row.
pub fn entry_at(entries: &[TaskbarEntry], column: u16) -> Option<WindowId> {
    entries
        .iter()
        .find(|entry| column >= entry.rect.x && column < entry.rect.right())
        .map(|entry| entry.id)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    entries: &[TaskbarEntry],
    start_open: bool,
    palette: &Palette,
) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let base = Style::default().bg(palette.taskbar_bg).fg(palette.taskbar_fg);
    let active = Style::default()
        .bg(palette.taskbar_active_bg)
        .fg(palette.taskbar_active_fg);
    let buffer = frame.buffer_mut();
    buffer.set_style(area, base);
    let start = if start_open { active } else { base };
    buffer.set_string(
        area.x,
        area.y + area.height / 2,
        START_LABEL,
        start.add_modifier(Modifier::BOLD),
    );
    for entry in entries {
        let style = if entry.active {
            active
        } else if entry.minimized {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        };
        buffer.set_string(entry.rect.x, entry.rect.y, &entry.label, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Viewport;

    #[test]
    fn entries_follow_opening_order_and_flag_state() {
        let mut wm = WindowManager::new(Viewport::new(1280, 800));
        let a = wm.launch("notepad");
        let b = wm.launch("paint");
        wm.minimize(b);
        let entries = layout(&wm, Rect::new(0, 47, 160, 3));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, a);
        assert_eq!(entries[0].label, " Notepad ");
        assert_eq!(entries[0].rect.y, 48);
        assert!(entries[0].active);
        assert!(entries[1].minimized);
        assert!(entries[1].rect.x > entries[0].rect.right());
        assert_eq!(entry_at(&entries, entries[1].rect.x), Some(b));
        assert_eq!(entry_at(&entries, 0), None);
    }

    #[test]
    fn overflowing_buttons_are_dropped() {
        let mut wm = WindowManager::new(Viewport::new(1280, 800));
        wm.launch("notepad");
        wm.launch("file-explorer");
        let entries = layout(&wm, Rect::new(0, 0, 24, 1));
        assert_eq!(entries.len(), 1);
    }
}
