use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{AppView, ShellContext, ViewContext};
use crate::state::WALLPAPERS;

fn render_lines(frame: &mut Frame, area: Rect, ctx: &ViewContext, lines: Vec<Line<'_>>) {
    let area = area.intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let palette = ctx.theme().palette();
    let style = Style::default().bg(palette.window_bg).fg(palette.window_fg);
    frame.render_widget(
        Paragraph::new(lines).style(style).wrap(Wrap { trim: false }),
        area,
    );
}

fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

/// Shown for app ids the router does not know.
#[derive(Debug, Default)]
pub struct PlaceholderView;

impl AppView for PlaceholderView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        render_lines(frame, area, ctx, vec![Line::from("App content not available")]);
    }
}

/// Plain text buffer.
#[derive(Debug, Default)]
pub struct NotepadView {
    text: String,
}

impl NotepadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AppView for NotepadView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        let mut lines: Vec<Line<'_>> = vec![Line::styled(
            "Untitled.txt",
            Style::default().add_modifier(Modifier::DIM),
        )];
        lines.extend(self.text.split('\n').map(Line::from));
        if ctx.focused()
            && let Some(last) = lines.last_mut()
        {
            last.push_span(Span::styled("▏", Style::default()));
        }
        render_lines(frame, area, ctx, lines);
    }

    fn handle_event(&mut self, event: &Event, _shell: &mut ShellContext<'_>) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        match key.code {
            // Ctrl/Alt chords are commands, not text
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.text.push(c)
            }
            KeyCode::Enter => self.text.push('\n'),
            KeyCode::Backspace => {
                self.text.pop();
            }
            _ => return false,
        }
        true
    }
}

#[derive(Debug)]
pub struct TerminalView {
    cwd: &'static str,
}

impl TerminalView {
    pub fn new() -> Self {
        Self { cwd: "/home/user" }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl AppView for TerminalView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        render_lines(
            frame,
            area,
            ctx,
            vec![
                Line::from("Phantom OS Terminal"),
                Line::from("Type 'help' to see available commands."),
                Line::from(""),
                Line::from(format!("user@phantom:{}$ ", self.cwd)),
            ],
        );
    }
}

#[derive(Debug, Default)]
pub struct PaintView;

impl AppView for PaintView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        render_lines(
            frame,
            area,
            ctx,
            vec![
                Line::from("Tools: pencil  eraser  circle  rectangle"),
                Line::from("Brush: 5px   Colour: #ffffff"),
            ],
        );
    }
}

#[derive(Debug, Default)]
pub struct MediaPlayerView;

impl AppView for MediaPlayerView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        render_lines(
            frame,
            area,
            ctx,
            vec![
                Line::from("No media loaded"),
                Line::from("0:00 / 0:00   Volume 80%"),
            ],
        );
    }
}

#[derive(Debug, Default)]
pub struct FileExplorerView;

impl AppView for FileExplorerView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        render_lines(
            frame,
            area,
            ctx,
            vec![
                Line::from("/home/user"),
                Line::from("  Documents/"),
                Line::from("  Downloads/"),
                Line::from("  Pictures/"),
            ],
        );
    }
}

/// Theme and wallpaper picker. The only view that uses the shell callbacks.
#[derive(Debug, Default)]
pub struct SettingsView {
    selected: usize,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_wallpaper(&self) -> &'static str {
        WALLPAPERS[self.selected % WALLPAPERS.len()]
    }
}

impl AppView for SettingsView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext) {
        let mut lines = vec![
            Line::from(format!("Theme: {}   [t] toggle", ctx.theme())),
            Line::from("Wallpaper   [←/→] choose  [Enter] apply"),
        ];
        lines.extend(WALLPAPERS.iter().enumerate().map(|(idx, name)| {
            let marker = if idx == self.selected { "> " } else { "  " };
            Line::from(format!("{marker}{name}"))
        }));
        render_lines(frame, area, ctx, lines);
    }

    fn handle_event(&mut self, event: &Event, shell: &mut ShellContext<'_>) -> bool {
        match key_press(event).map(|key| key.code) {
            Some(KeyCode::Char('t')) => shell.toggle_theme(),
            Some(KeyCode::Left) | Some(KeyCode::Up) => {
                self.selected = (self.selected + WALLPAPERS.len() - 1) % WALLPAPERS.len();
            }
            Some(KeyCode::Right) | Some(KeyCode::Down) => {
                self.selected = (self.selected + 1) % WALLPAPERS.len();
            }
            Some(KeyCode::Enter) => {
                let wallpaper = self.selected_wallpaper();
                if shell.current_wallpaper() == wallpaper {
                    return false;
                }
                shell.change_wallpaper(wallpaper);
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ShellState;
    use crate::theme::Theme;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn notepad_edits_text() {
        let mut state = ShellState::new();
        let mut shell = ShellContext::new(&mut state);
        let mut view = NotepadView::new();
        assert!(view.handle_event(&key(KeyCode::Char('h')), &mut shell));
        assert!(view.handle_event(&key(KeyCode::Char('i')), &mut shell));
        assert!(view.handle_event(&key(KeyCode::Enter), &mut shell));
        assert!(view.handle_event(&key(KeyCode::Backspace), &mut shell));
        assert!(!view.handle_event(&key(KeyCode::F(2)), &mut shell));
        assert_eq!(view.text(), "hi");
    }

    #[test]
    fn notepad_ignores_control_and_alt_chords() {
        let mut state = ShellState::new();
        let mut shell = ShellContext::new(&mut state);
        let mut view = NotepadView::new();
        let chord = |c, mods| Event::Key(KeyEvent::new(KeyCode::Char(c), mods));
        assert!(!view.handle_event(&chord('a', KeyModifiers::CONTROL), &mut shell));
        assert!(!view.handle_event(&chord('x', KeyModifiers::ALT), &mut shell));
        assert!(view.handle_event(&chord('H', KeyModifiers::SHIFT), &mut shell));
        assert!(view.handle_event(&chord('i', KeyModifiers::NONE), &mut shell));
        assert_eq!(view.text(), "Hi");
    }

    #[test]
    fn settings_skips_reapplying_the_current_wallpaper() {
        let mut state = ShellState::new();
        let mut shell = ShellContext::new(&mut state);
        let mut view = SettingsView::new();
        assert_eq!(shell.current_wallpaper(), WALLPAPERS[0]);
        assert!(!view.handle_event(&key(KeyCode::Enter), &mut shell));
        view.handle_event(&key(KeyCode::Down), &mut shell);
        assert!(view.handle_event(&key(KeyCode::Enter), &mut shell));
        assert_eq!(shell.current_wallpaper(), WALLPAPERS[1]);
    }

    #[test]
    fn settings_drives_shell_callbacks() {
        let mut state = ShellState::new();
        let mut view = SettingsView::new();
        {
            let mut shell = ShellContext::new(&mut state);
            view.handle_event(&key(KeyCode::Char('t')), &mut shell);
            view.handle_event(&key(KeyCode::Right), &mut shell);
            view.handle_event(&key(KeyCode::Right), &mut shell);
            view.handle_event(&key(KeyCode::Enter), &mut shell);
        }
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.wallpaper(), WALLPAPERS[2]);
    }

    #[test]
    fn settings_selection_wraps_backwards() {
        let mut state = ShellState::new();
        let mut shell = ShellContext::new(&mut state);
        let mut view = SettingsView::new();
        view.handle_event(&key(KeyCode::Left), &mut shell);
        assert_eq!(view.selected_wallpaper(), WALLPAPERS[WALLPAPERS.len() - 1]);
    }
}
