//! Application content and the router that picks it per window.

pub mod catalog;
mod context;
mod views;

use std::collections::BTreeMap;

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;

pub use context::{ShellContext, ViewContext};
pub use views::{
    FileExplorerView, MediaPlayerView, NotepadView, PaintView, PlaceholderView, SettingsView,
    TerminalView,
};

use crate::window::AppId;

/// Content rendered inside a window body.
pub trait AppView {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ViewContext);

    fn handle_event(&mut self, _event: &Event, _shell: &mut ShellContext<'_>) -> bool {
        false
    }
}

pub type ViewFactory = fn() -> Box<dyn AppView>;

/// Static `app id -> view` lookup. Unknown ids resolve to a placeholder.
#[derive(Debug, Clone, Default)]
pub struct ContentRouter {
    routes: BTreeMap<String, ViewFactory>,
}

impl ContentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut router = Self::new();
        router.register(catalog::NOTEPAD, || Box::new(NotepadView::new()));
        router.register(catalog::TERMINAL, || Box::new(TerminalView::new()));
        router.register(catalog::PAINT, || Box::new(PaintView));
        router.register(catalog::MEDIA_PLAYER, || Box::new(MediaPlayerView));
        router.register(catalog::SETTINGS, || Box::new(SettingsView::new()));
        router.register(catalog::FILE_EXPLORER, || Box::new(FileExplorerView));
        router
    }

    pub fn register(&mut self, app_id: impl Into<String>, factory: ViewFactory) {
        self.routes.insert(app_id.into(), factory);
    }

    pub fn is_known(&self, app_id: &AppId) -> bool {
        self.routes.contains_key(app_id.as_str())
    }

    pub fn resolve(&self, app_id: &AppId) -> Box<dyn AppView> {
        match self.routes.get(app_id.as_str()) {
            Some(factory) => factory(),
            None => {
                tracing::debug!(app_id = %app_id, "no view registered, using placeholder");
                Box::new(PlaceholderView)
            }
        }
    }
}
