use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use super::{Bounds, Point, Size};
use crate::constants::{
    RESIZE_CORNER_SIZE, RESIZE_EDGE_THICKNESS, TITLE_BAR_HEIGHT, TITLE_BUTTON_WIDTH,
};
use crate::theme::Palette;

/// Pixel geometry of window chrome used for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub title_bar_height: i32,
    pub button_width: i32,
    /// Gap between the rightmost button and the window's right edge.
    pub button_margin: i32,
    pub resize_corner: Size,
    pub resize_edge: Size,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: TITLE_BAR_HEIGHT,
            button_width: TITLE_BUTTON_WIDTH,
            button_margin: 12,
            resize_corner: Size::new(RESIZE_CORNER_SIZE, RESIZE_CORNER_SIZE),
            resize_edge: Size::new(RESIZE_EDGE_THICKNESS, RESIZE_EDGE_THICKNESS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Minimize,
    Maximize,
    Close,
    Drag,
}

impl ChromeMetrics {
    pub fn title_bar(&self, frame: Bounds) -> Bounds {
        Bounds::new(
            frame.x,
            frame.y,
            frame.width,
            self.title_bar_height.min(frame.height),
        )
    }

    /// Title-bar buttons, left to right.
    pub fn buttons(&self, frame: Bounds) -> [(HeaderAction, Bounds); 3] {
        let bar = self.title_bar(frame);
        let close_x = bar.right() - self.button_margin - self.button_width;
        let button = |x: i32| Bounds::new(x, bar.y, self.button_width, bar.height);
        [
            (
                HeaderAction::Minimize,
                button(close_x - 2 * self.button_width),
            ),
            (HeaderAction::Maximize, button(close_x - self.button_width)),
            (HeaderAction::Close, button(close_x)),
        ]
    }

    /// What a press at `point` inside the title bar of `frame` does, or
    /// `None` when the point is outside the title bar.
    pub fn header_action(&self, frame: Bounds, point: Point) -> Option<HeaderAction> {
        if !self.title_bar(frame).contains(point) {
            return None;
        }
        let action = self
            .buttons(frame)
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(action, _)| action)
            .unwrap_or(HeaderAction::Drag);
        Some(action)
    }
}

/// Cell-space placement of one window's chrome.
#[derive(Debug, Clone)]
pub struct WindowChrome<'a> {
    pub rect: Rect,
    pub title_row: u16,
    pub buttons: [(HeaderAction, Rect); 3],
    pub title: &'a str,
    pub focused: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(&self, frame: &mut Frame, chrome: &WindowChrome<'_>, palette: &Palette);
}

#[derive(Debug, Default)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn button_symbol(action: HeaderAction) -> &'static str {
        match action {
            HeaderAction::Minimize => "_",
            HeaderAction::Maximize => "□",
            HeaderAction::Close => "×",
            HeaderAction::Drag => " ",
        }
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render_window(&self, frame: &mut Frame, chrome: &WindowChrome<'_>, palette: &Palette) {
        let rect = chrome.rect;
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let buffer = frame.buffer_mut();

        let border_style = Style::default()
            .fg(if chrome.focused {
                palette.border_active
            } else {
                palette.border
            })
            .bg(palette.window_bg);
        let header_style = Style::default()
            .bg(if chrome.focused {
                palette.header_active_bg
            } else {
                palette.header_bg
            })
            .fg(palette.header_fg);
        let title_style = if chrome.focused {
            header_style.fg(palette.window_fg).add_modifier(Modifier::BOLD)
        } else {
            header_style
        };
        let body_style = Style::default().bg(palette.window_bg).fg(palette.window_fg);

        let left = rect.x;
        let top = rect.y;
        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(1);

        for y in top..=bottom {
            for x in left..=right {
                let Some(cell) = buffer.cell_mut((x, y)) else {
                    continue;
                };
                let on_edge = x == left || x == right || y == top || y == bottom;
                let symbol = match (x == left, x == right, y == top, y == bottom) {
                    (true, _, true, _) => "┌",
                    (_, true, true, _) => "┐",
                    (true, _, _, true) => "└",
                    (_, true, _, true) => "┘",
                    (_, _, true, _) | (_, _, _, true) => "─",
                    (true, _, _, _) | (_, true, _, _) => "│",
                    _ => " ",
                };
                cell.set_symbol(symbol);
                if on_edge {
                    cell.set_style(border_style);
                } else if y == chrome.title_row {
                    cell.set_style(header_style);
                } else {
                    cell.set_style(body_style);
                }
            }
        }

        // Title, left-aligned, stopping short of the buttons.
        let buttons_left = chrome
            .buttons
            .iter()
            .map(|(_, r)| r.x)
            .min()
            .unwrap_or(right);
        let mut x = left.saturating_add(2);
        for ch in chrome.title.chars() {
            if x.saturating_add(1) >= buttons_left {
                break;
            }
            if let Some(cell) = buffer.cell_mut((x, chrome.title_row)) {
                cell.set_char(ch);
                cell.set_style(title_style);
            }
            x = x.saturating_add(1);
        }

        for (action, button) in &chrome.buttons {
            if button.width == 0 {
                continue;
            }
            let style = if *action == HeaderAction::Close {
                header_style.fg(palette.close_fg)
            } else {
                header_style
            };
            let mid = button.x.saturating_add(button.width / 2);
            if mid > left
                && mid < right
                && let Some(cell) = buffer.cell_mut((mid, chrome.title_row))
            {
                cell.set_symbol(Self::button_symbol(*action));
                cell.set_style(style);
            }
        }
    }
}
