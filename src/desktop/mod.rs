//! Terminal desktop shell.
//!
//! `Desktop` owns the window manager, one app view per open window and the
//! shell settings views may change. It turns terminal input into window
//! manager calls and draws the windows back to front with the taskbar on
//! top. Apps open from the start menu, the desktop icons or shortcuts.

pub mod launcher;
mod scale;
pub mod taskbar;

use std::collections::BTreeMap;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};

pub use launcher::{DesktopIcons, StartMenu};
pub use scale::CellScale;
pub use taskbar::TaskbarEntry;

use crate::apps::catalog::BUILTIN_APPS;
use crate::apps::{AppView, ContentRouter, ShellContext, ViewContext};
use crate::config::DesktopConfig;
use crate::keybindings::Action;
use crate::state::ShellState;
use crate::theme::Palette;
use crate::window::decorator::{DefaultDecorator, WindowChrome, WindowDecorator};
use crate::window::{AppId, Viewport, Window, WindowId, WindowManager};

pub struct Desktop {
    wm: WindowManager,
    router: ContentRouter,
    views: BTreeMap<WindowId, Box<dyn AppView>>,
    shell: ShellState,
    scale: CellScale,
    taskbar_rows: u16,
    decorator: Box<dyn WindowDecorator>,
    start_menu: StartMenu,
    icons: DesktopIcons,
    area: Rect,
}

impl Desktop {
    pub fn new(config: &DesktopConfig) -> Self {
        let scale = config.scale;
        let taskbar_rows = scale.rows_for(config.taskbar_height);
        let wm = WindowManager::new(Viewport::new(0, 0))
            .with_metrics(scale.chrome_metrics())
            .with_taskbar_height(i32::from(taskbar_rows) * scale.cell_height);
        Self {
            wm,
            router: ContentRouter::builtin(),
            views: BTreeMap::new(),
            shell: ShellState::new(),
            scale,
            taskbar_rows,
            decorator: Box::new(DefaultDecorator),
            start_menu: StartMenu::default(),
            icons: DesktopIcons::default(),
            area: Rect::default(),
        }
    }

    pub fn with_router(mut self, router: ContentRouter) -> Self {
        self.router = router;
        self
    }

    pub fn with_decorator(mut self, decorator: Box<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn window_manager(&self) -> &WindowManager {
        &self.wm
    }

    pub fn window_manager_mut(&mut self) -> &mut WindowManager {
        &mut self.wm
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    pub fn start_menu_open(&self) -> bool {
        self.start_menu.is_open()
    }

    pub fn selected_icon(&self) -> Option<&'static str> {
        self.icons.selected()
    }

    pub fn has_view(&self, id: WindowId) -> bool {
        self.views.contains_key(&id)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.wm.set_viewport(self.scale.viewport(area));
    }

    pub fn desktop_area(&self) -> Rect {
        Rect {
            height: self.area.height.saturating_sub(self.taskbar_rows),
            ..self.area
        }
    }

    pub fn taskbar_area(&self) -> Rect {
        let height = self.taskbar_rows.min(self.area.height);
        Rect {
            y: self.area.bottom().saturating_sub(height),
            height,
            ..self.area
        }
    }

    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        taskbar::layout(&self.wm, self.taskbar_area())
    }

    /// Open `app_id`, or bring back its existing window.
    pub fn launch(&mut self, app_id: impl Into<AppId>) -> WindowId {
        let app_id = app_id.into();
        let id = self.wm.launch(app_id.clone());
        self.views
            .entry(id)
            .or_insert_with(|| self.router.resolve(&app_id));
        id
    }

    /// Route one input event. Returns whether anything consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, *width, *height));
                true
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Key(key) if key.code == KeyCode::Esc && self.start_menu.is_open() => {
                self.start_menu.close();
                true
            }
            Event::Key(_) => self.dispatch_to_active(event),
            _ => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        self.handle_mouse_at(mouse, Instant::now())
    }

    /// Route a mouse event. `now` drives double-click detection on title
    /// bars and desktop icons.
    pub fn handle_mouse_at(&mut self, mouse: &MouseEvent, now: Instant) -> bool {
        let point = self.scale.point(mouse.column, mouse.row);
        let handled = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row, now),
            MouseEventKind::Drag(MouseButton::Left) => self.wm.pointer_move(point),
            MouseEventKind::Up(MouseButton::Left) => self.wm.pointer_up(),
            _ => false,
        };
        self.release_closed();
        handled
    }

    /// Left press, front to back: start menu, taskbar, windows, icons.
    fn press(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let cell = Position::new(column, row);
        let desktop = self.desktop_area();
        let taskbar = self.taskbar_area();
        let on_start = launcher::start_button(taskbar).contains(cell);

        if self.start_menu.is_open() {
            if let Some(app) = StartMenu::item_at(desktop, taskbar, column, row) {
                self.start_menu.close();
                tracing::debug!(app_id = app, "start menu launch");
                self.launch(app);
                return true;
            }
            if StartMenu::bounds(desktop, taskbar).contains(cell) {
                return true;
            }
            if !on_start {
                self.start_menu.close();
            }
        }

        if taskbar.contains(cell) {
            if on_start {
                self.start_menu.toggle();
                return true;
            }
            return self.click_taskbar(column);
        }

        let point = self.scale.point(column, row);
        if self.wm.pointer_down_at(point, now).is_some() {
            self.icons.clear_selection();
            return true;
        }
        if let Some(app) = self.icons.click(desktop, column, row, now) {
            tracing::debug!(app_id = app, "desktop icon launch");
            self.launch(app);
        }
        self.icons.selected().is_some()
    }

    fn click_taskbar(&mut self, column: u16) -> bool {
        match taskbar::entry_at(&self.taskbar_entries(), column) {
            Some(id) => self.wm.taskbar_click(id),
            None => false,
        }
    }

    fn dispatch_to_active(&mut self, event: &Event) -> bool {
        let Some(id) = self.wm.active() else {
            return false;
        };
        let Some(view) = self.views.get_mut(&id) else {
            return false;
        };
        let mut shell = ShellContext::new(&mut self.shell);
        let handled = view.handle_event(event, &mut shell);
        if let Some(theme) = self.shell.take_theme_change() {
            tracing::info!(%theme, "theme changed");
        }
        handled
    }

    /// Apply a desktop shortcut. `Quit` is left to the caller.
    pub fn apply(&mut self, action: Action) -> bool {
        let handled = match action {
            Action::Quit => false,
            Action::LaunchApp(slot) => match BUILTIN_APPS.get(usize::from(slot)) {
                Some(app) => {
                    self.launch(*app);
                    true
                }
                None => false,
            },
            Action::MinimizeActive => self.wm.active().is_some_and(|id| self.wm.minimize(id)),
            Action::ToggleMaximizeActive => self
                .wm
                .active()
                .is_some_and(|id| self.wm.toggle_maximize(id)),
            Action::CloseActive => self.wm.active().is_some_and(|id| self.wm.close(id)),
            Action::CycleNextWindow => self.cycle(true),
            Action::CyclePrevWindow => self.cycle(false),
            Action::ToggleTheme => {
                self.shell.toggle_theme();
                if let Some(theme) = self.shell.take_theme_change() {
                    tracing::info!(%theme, "theme changed");
                }
                true
            }
        };
        self.release_closed();
        handled
    }

    /// Activate the window after (or before) the active one in opening
    /// order, wrapping around. Minimized windows are included and restored.
    fn cycle(&mut self, forward: bool) -> bool {
        let ids: Vec<WindowId> = self.wm.windows().iter().map(Window::id).collect();
        if ids.is_empty() {
            return false;
        }
        let len = ids.len();
        let next = match self
            .wm
            .active()
            .and_then(|active| ids.iter().position(|id| *id == active))
        {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.wm.activate(ids[next])
    }

    fn release_closed(&mut self) {
        for closed in self.wm.take_closed_windows() {
            if self.views.remove(&closed.id).is_some() {
                tracing::debug!(window_id = %closed.id, app_id = %closed.app_id, "released app view");
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.area {
            self.resize(area);
        }
        let theme = self.shell.theme();
        let palette = theme.palette();

        let desktop = self.desktop_area();
        let background = Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg);
        frame.buffer_mut().set_style(desktop, background);
        self.render_wallpaper_label(frame, desktop, background);
        self.icons.render(frame, desktop, &palette);

        for id in self.wm.display_order() {
            self.render_window(frame, id, &palette);
        }

        let taskbar = self.taskbar_area();
        let entries = self.taskbar_entries();
        taskbar::render(frame, taskbar, &entries, self.start_menu.is_open(), &palette);
        self.start_menu.render(frame, desktop, taskbar, &palette);
    }

    fn render_wallpaper_label(&self, frame: &mut Frame, desktop: Rect, style: Style) {
        let label = format!("{} · {}", self.shell.wallpaper(), self.shell.theme());
        let width = label.chars().count() as u16;
        if desktop.height == 0 || desktop.width <= width {
            return;
        }
        frame.buffer_mut().set_string(
            desktop.right() - width - 1,
            desktop.bottom() - 1,
            label,
            style.add_modifier(Modifier::DIM),
        );
    }

    fn render_window(&mut self, frame: &mut Frame, id: WindowId, palette: &Palette) {
        let (Some(bounds), Some(window)) = (self.wm.frame_bounds(id), self.wm.window(id)) else {
            return;
        };
        let rect = self.scale.cell_rect(bounds);
        if rect.width < 2 || rect.height < 3 {
            return;
        }
        let title_row = rect.y + 1;
        let scale = self.scale;
        let buttons = self.wm.metrics().buttons(bounds).map(|(action, button)| {
            let cells = scale.cell_rect(button);
            (action, Rect::new(cells.x, title_row, cells.width, 1))
        });
        let focused = self.wm.active() == Some(id);
        let chrome = WindowChrome {
            rect,
            title_row,
            buttons,
            title: window.title(),
            focused,
        };
        self.decorator.render_window(frame, &chrome, palette);

        let content = Rect::new(
            rect.x.saturating_add(1),
            rect.y.saturating_add(2),
            rect.width - 2,
            rect.height - 3,
        );
        if let Some(view) = self.views.get_mut(&id) {
            let ctx = ViewContext::new(focused).with_theme(self.shell.theme());
            view.render(frame, content, &ctx);
        }
    }
}
